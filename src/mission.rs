//! Mission content
//!
//! The seeded filesystem for the interception exercise and the condition that
//! marks it solved. This is game data, not a general policy.

use log::warn;

use crate::storage::VirtualFs;

pub const README: &str = "MISSION: Read files in /intercepts. Use the 'mv' command to move them to the correct department inside /secure_nodes. \nCOMMANDS: \n- ls (list files)\n- cd [dir] (change directory)\n- cat [file] (read file)\n- mv [file] [path] (move file)";

pub const INTERCEPTS_DIR: &str = "/intercepts";
pub const FINANCIAL_CRIMES_DIR: &str = "/secure_nodes/financial_crimes";
pub const WIRE_TRANSFER: &str = "wire_transfer.dat";

pub const DECRYPTED_BANNER: &str = "=== SYSTEM DECRYPTED ===";
pub const DECRYPTED_MESSAGE: &str = "All files securely categorized. Good work, Agent.";

enum Seed {
    Dir(&'static str),
    File(&'static str, &'static str),
}

// Insertion order fixes listing order.
const SEED: &[Seed] = &[
    Seed::Dir("/intercepts"),
    Seed::Dir("/secure_nodes"),
    Seed::File("/readme.txt", README),
    Seed::File(
        "/intercepts/audio_77.log",
        "TRANSCRIPT: 'The money is moving through the shell company tonight.'",
    ),
    Seed::File(
        "/intercepts/wire_transfer.dat",
        "ROUTING: $4.2M -> Cayman Islands Account #9948",
    ),
    Seed::File(
        "/intercepts/suspect_alpha.doc",
        "ALIAS: The Ghost. Last seen in sector 4. High flight risk.",
    ),
    Seed::Dir("/secure_nodes/financial_crimes"),
    Seed::Dir("/secure_nodes/surveillance"),
    Seed::Dir("/secure_nodes/profiles"),
];

/// Builds a fresh copy of the mission filesystem.
pub fn seed_filesystem() -> VirtualFs {
    let mut fs = VirtualFs::new();
    for entry in SEED {
        let result = match entry {
            Seed::Dir(path) => fs.create_dir(path),
            Seed::File(path, content) => fs.create_file(path, *content),
        };
        if let Err(e) = result {
            warn!("Skipping seed entry: {}", e);
        }
    }
    fs
}

/// The wire transfer is filed under financial crimes and the intercepts are cleared.
pub fn is_decrypted(fs: &VirtualFs) -> bool {
    let filed = fs
        .list(FINANCIAL_CRIMES_DIR)
        .map(|children| children.iter().any(|c| c == WIRE_TRANSFER))
        .unwrap_or(false);
    let cleared = fs
        .list(INTERCEPTS_DIR)
        .map(|children| children.is_empty())
        .unwrap_or(false);
    filed && cleared
}
