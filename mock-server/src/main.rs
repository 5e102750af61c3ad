use mock_server::Keys;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let keys = Keys {
        guest: std::env::var("GUEST_KEY").unwrap_or_else(|_| "guest-secret".to_string()),
        dashboard: std::env::var("DASHBOARD_KEY").unwrap_or_else(|_| "dashboard-secret".to_string()),
    };
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    println!("listening on {addr}");
    mock_server::run(listener, keys).await
}
