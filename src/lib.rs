//! MI5 Terminal
//!
//! A scripted "hacker" terminal game. Players navigate a small virtual
//! filesystem with `ls`, `cd`, `cat` and `mv` and win by filing the
//! intercepted documents.

pub mod config;
pub mod error;
pub mod gallery;
pub mod middleware;
pub mod mission;
pub mod navigate;
pub mod protocol;
pub mod server;
pub mod session;
pub mod storage;
pub mod targets;
pub mod utils;

pub use config::ServerConfig;
pub use server::Server;
pub use session::Session;
