use std::path::Path;

use reqwest::Proxy;
use tokio::io::AsyncBufReadExt;

/// Reads a newline-delimited file into trimmed, non-empty lines, preserving order.
pub async fn read_file_lines(path: impl AsRef<Path>) -> eyre::Result<Vec<String>> {
    let file = tokio::fs::read(path).await?;
    let mut lines = file.lines();

    let mut contents = vec![];
    while let Some(line) = lines.next_line().await? {
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            contents.push(trimmed.to_string());
        }
    }

    Ok(contents)
}

/// Turns a `host:port` or `host:port:user:pass` endpoint into a proxy
/// covering both HTTP and HTTPS traffic.
pub fn build_proxy(endpoint: &str) -> eyre::Result<Proxy> {
    let parts: Vec<&str> = endpoint.split(':').collect();

    let proxy = match parts.as_slice() {
        [host, port] => Proxy::all(format!("http://{host}:{port}"))?,
        [host, port, user, pass] => {
            Proxy::all(format!("http://{host}:{port}"))?.basic_auth(user, pass)
        }
        _ => eyre::bail!("Malformed proxy endpoint: {endpoint}"),
    };

    Ok(proxy)
}
