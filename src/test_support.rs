//! A throwaway HTTP server for exercising the fetch path without the network.

use reqwest::{Client, Url};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serves a single canned response on a random local port and returns its URL.
///
/// `delay` holds the response back, which lets tests observe the dashboard
/// before the fetch resolves.
pub(crate) async fn serve_once(status: &str, body: &str, delay: Duration) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = vec![0u8; 4096];
        let _ = socket.read(&mut request).await;
        tokio::time::sleep(delay).await;
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
    });
    Url::parse(&format!("http://{addr}/api/v1/devices")).unwrap()
}

/// A URL on a local port nothing listens on, so connecting fails immediately.
pub(crate) async fn refused_url() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{addr}/api/v1/devices")).unwrap()
}

/// A client that ignores proxy settings from the environment.
pub(crate) fn local_client() -> Client {
    Client::builder().no_proxy().build().unwrap()
}
