use std::time::Duration;

use anyhow::{Context, Result};
use nexglab_config::AppConfig;
use nexglab_runtime::PortalServices;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
    time::timeout,
};

async fn raw_get(address: &str, path: &str, cookie: Option<&str>) -> Result<String> {
    let mut stream = TcpStream::connect(address).await?;
    let cookie = cookie
        .map(|value| format!("Cookie: {value}\r\n"))
        .unwrap_or_default();
    let request = format!("GET {path} HTTP/1.1\r\nHost: {address}\r\n{cookie}Connection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await?;

    let mut response = String::new();
    timeout(Duration::from_secs(5), stream.read_to_string(&mut response))
        .await
        .context("server did not answer in time")??;
    Ok(response)
}

#[test]
fn initialise_uses_configured_address() -> Result<()> {
    let mut config = AppConfig::default();
    config.http.address = "0.0.0.0".into();
    config.http.port = 8080;

    let services = PortalServices::initialise(&config)?;
    assert_eq!(services.address(), "0.0.0.0:8080");
    Ok(())
}

#[test]
fn initialise_reports_unusable_security_headers() {
    let mut config = AppConfig::default();
    config.security.frame_ancestors = vec!["'self'\r\n".into()];

    let error = match PortalServices::initialise(&config) {
        Ok(_) => panic!("expected router construction to fail"),
        Err(error) => error,
    };
    let message = format!("{error:?}");
    assert!(
        message.contains("failed to build portal router"),
        "expected router failure context, got {message}"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn served_router_answers_and_guards() -> Result<()> {
    let services = PortalServices::initialise(&AppConfig::default())?;
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let address = listener.local_addr()?.to_string();

    let server = tokio::spawn(async move {
        axum::serve(listener, services.into_router()).await
    });

    let health = raw_get(&address, "/health", None).await?;
    assert!(health.starts_with("HTTP/1.1 200"), "unexpected response: {health}");
    assert!(health.contains("\"status\":\"ok\""));

    let guarded = raw_get(&address, "/enstp/ci", None).await?;
    assert!(guarded.starts_with("HTTP/1.1 307"), "unexpected response: {guarded}");
    assert!(guarded.to_ascii_lowercase().contains("location: /enstp\r\n"));

    let admitted = raw_get(&address, "/enstp/ci", Some("emailENSTP=a@enstp.edu.dz")).await?;
    assert!(admitted.starts_with("HTTP/1.1 200"), "unexpected response: {admitted}");

    server.abort();
    Ok(())
}
