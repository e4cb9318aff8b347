// src/core/net.rs

// HTTP/1.0 GET over plain TCP, no TLS. The tag reference pages are served
// over plain HTTP, and HTTP/1.0 with Connection: close means the server
// ends the body at EOF (no chunked transfer to deal with).

use std::{
    io::{Read, Write},
    net::TcpStream,
    time::Duration,
};

use crate::error::{Error, Result};
use crate::params::{HOST, HTTP_TIMEOUT_SECS, PREFIX, page_url};

/// Fetch one source page and return the response body.
///
/// `page` is a path relative to `params::PREFIX`, e.g. `"baseline.html"`.
/// One request, no retries; a failure aborts the whole run.
pub fn http_get(page: &str) -> Result<String> {
    let url = page_url(page);
    let net_err = |reason: String| Error::Network {
        url: url.clone(),
        reason,
    };

    let mut stream =
        TcpStream::connect((HOST, 80)).map_err(|e| net_err(e.to_string()))?;
    stream
        .set_read_timeout(Some(Duration::from_secs(HTTP_TIMEOUT_SECS)))
        .map_err(|e| net_err(e.to_string()))?;
    stream
        .set_write_timeout(Some(Duration::from_secs(HTTP_TIMEOUT_SECS)))
        .map_err(|e| net_err(e.to_string()))?;

    let req = format!(
        "GET {}{} HTTP/1.0\r\nHost: {}\r\nUser-Agent: tag_scrape/0.2\r\nConnection: close\r\n\r\n",
        PREFIX, page, HOST
    );
    stream
        .write_all(req.as_bytes())
        .and_then(|_| stream.flush())
        .map_err(|e| net_err(e.to_string()))?;

    let mut buf = Vec::new();
    stream
        .read_to_end(&mut buf)
        .map_err(|e| net_err(e.to_string()))?;
    let resp = String::from_utf8_lossy(&buf);

    let status_line = resp.split("\r\n").next().unwrap_or("");
    if status_line.split_whitespace().nth(1) != Some("200") {
        return Err(net_err(format!("HTTP error: {}", status_line)));
    }

    let body_idx = resp
        .find("\r\n\r\n")
        .ok_or_else(|| net_err(s!("malformed HTTP response")))?
        + 4;
    logd!("{}: {} bytes", page, resp.len() - body_idx);
    Ok(resp[body_idx..].to_string())
}
