use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;

use mi5_terminal::server::ClientRegistry;
use mi5_terminal::{Server, ServerConfig};

const PROMPT_END: &str = "$ ";

fn test_config(max_clients: usize) -> ServerConfig {
    ServerConfig {
        bind_address: "127.0.0.1".to_string(),
        port: 0,
        max_clients,
        max_command_length: 128,
        color: false,
        greeting: true,
    }
}

// Start a server on an ephemeral port and return its address
async fn start_test_server(max_clients: usize) -> SocketAddr {
    start_test_server_with_registry(max_clients).await.0
}

// Same as above, also handing back the live client registry
async fn start_test_server_with_registry(max_clients: usize) -> (SocketAddr, ClientRegistry) {
    let server = Server::bind(test_config(max_clients)).await.unwrap();
    let addr = server.local_addr().unwrap();
    let registry = server.client_registry();
    tokio::spawn(async move {
        server.start().await;
    });
    (addr, registry)
}

// Read until the prompt is shown or the connection closes
async fn read_response(stream: &mut TcpStream) -> String {
    let mut response = String::new();
    let mut buffer = [0u8; 1024];
    loop {
        let n = timeout(Duration::from_secs(5), stream.read(&mut buffer))
            .await
            .expect("timed out waiting for server")
            .unwrap();
        if n == 0 {
            break;
        }
        response.push_str(&String::from_utf8_lossy(&buffer[..n]));
        if response.ends_with(PROMPT_END) {
            break;
        }
    }
    response
}

// Helper to send command and read response up to the next prompt
async fn send_command(stream: &mut TcpStream, command: &str) -> String {
    stream
        .write_all(format!("{}\r\n", command).as_bytes())
        .await
        .unwrap();
    stream.flush().await.unwrap();
    read_response(stream).await
}

async fn connect(addr: SocketAddr) -> (TcpStream, String) {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let greeting = read_response(&mut stream).await;
    (stream, greeting)
}

#[tokio::test]
async fn test_initial_connection() {
    let addr = start_test_server(4).await;
    let (_stream, greeting) = connect(addr).await;
    assert!(greeting.starts_with("MI5 SECURE TERMINAL"));
    assert!(greeting.ends_with("root@mi5:/$ "));
}

#[tokio::test]
async fn test_ls_and_cd() {
    let addr = start_test_server(4).await;
    let (mut stream, _) = connect(addr).await;

    let response = send_command(&mut stream, "ls").await;
    assert_eq!(response, "intercepts  secure_nodes  readme.txt\r\nroot@mi5:/$ ");

    let response = send_command(&mut stream, "cd intercepts").await;
    assert_eq!(response, "root@mi5:/intercepts$ ");

    let response = send_command(&mut stream, "cd nowhere").await;
    assert_eq!(response, "cd: nowhere: No such directory\r\nroot@mi5:/intercepts$ ");

    let response = send_command(&mut stream, "cd ..").await;
    assert_eq!(response, "root@mi5:/$ ");
}

#[tokio::test]
async fn test_cat_readme_spans_lines() {
    let addr = start_test_server(4).await;
    let (mut stream, _) = connect(addr).await;

    let response = send_command(&mut stream, "cat readme.txt").await;
    assert!(response.starts_with("MISSION: Read files in /intercepts."));
    assert!(response.contains("\r\n- mv [file] [path] (move file)\r\n"));
}

#[tokio::test]
async fn test_unknown_command() {
    let addr = start_test_server(4).await;
    let (mut stream, _) = connect(addr).await;

    let response = send_command(&mut stream, "sudo su").await;
    assert_eq!(response, "Command not found: sudo\r\nroot@mi5:/$ ");
}

#[tokio::test]
async fn test_mission_completion() {
    let addr = start_test_server(4).await;
    let (mut stream, _) = connect(addr).await;

    send_command(&mut stream, "cd intercepts").await;
    let response = send_command(&mut stream, "cat wire_transfer.dat").await;
    assert!(response.starts_with("ROUTING: $4.2M -> Cayman Islands Account #9948\r\n"));
    send_command(&mut stream, "cd ..").await;

    let response = send_command(
        &mut stream,
        "mv intercepts/wire_transfer.dat /secure_nodes/financial_crimes",
    )
    .await;
    assert_eq!(
        response,
        "Moved wire_transfer.dat to /secure_nodes/financial_crimes\r\nroot@mi5:/$ "
    );

    send_command(&mut stream, "mv intercepts/audio_77.log secure_nodes/surveillance").await;
    let response = send_command(&mut stream, "mv intercepts/suspect_alpha.doc secure_nodes/profiles").await;
    assert!(response.contains("=== SYSTEM DECRYPTED ===\r\n"));
    assert!(response.contains("All files securely categorized. Good work, Agent.\r\n"));
}

#[tokio::test]
async fn test_sessions_are_independent() {
    let addr = start_test_server(4).await;
    let (mut first, _) = connect(addr).await;
    let (mut second, _) = connect(addr).await;

    send_command(&mut first, "mv readme.txt secure_nodes").await;
    let response = send_command(&mut first, "ls").await;
    assert_eq!(response, "intercepts  secure_nodes\r\nroot@mi5:/$ ");

    let response = send_command(&mut second, "ls").await;
    assert_eq!(response, "intercepts  secure_nodes  readme.txt\r\nroot@mi5:/$ ");
}

#[tokio::test]
async fn test_exit_closes_connection() {
    let addr = start_test_server(4).await;
    let (mut stream, _) = connect(addr).await;

    let response = send_command(&mut stream, "exit").await;
    assert_eq!(response, "Connection terminated.\r\n");

    let mut buffer = [0u8; 16];
    let n = timeout(Duration::from_secs(5), stream.read(&mut buffer))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(n, 0);
}

#[tokio::test]
async fn test_session_limit() {
    let (addr, registry) = start_test_server_with_registry(1).await;
    let (mut first, _) = connect(addr).await;
    assert_eq!(registry.lock().await.len(), 1);

    let (_second, response) = connect(addr).await;
    assert_eq!(response, "Too many connections. Try again later.\r\n");
    assert_eq!(registry.lock().await.len(), 1);

    // The first session keeps working
    let response = send_command(&mut first, "pwd").await;
    assert_eq!(response, "/\r\nroot@mi5:/$ ");

    send_command(&mut first, "exit").await;
    drop(first);

    // The slot frees up once the first session is gone
    let mut attempts = 50;
    while !registry.lock().await.is_empty() {
        attempts -= 1;
        assert!(attempts > 0, "session slot was never released");
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    let (_third, greeting) = connect(addr).await;
    assert!(greeting.starts_with("MI5 SECURE TERMINAL"));
}

#[tokio::test]
async fn test_overlong_command_is_rejected() {
    let addr = start_test_server(4).await;
    let (mut stream, _) = connect(addr).await;

    let response = send_command(&mut stream, &format!("cat {}", "a".repeat(200))).await;
    assert_eq!(response, "Command too long\r\nroot@mi5:/$ ");
}
