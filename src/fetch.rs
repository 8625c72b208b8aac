// src/fetch.rs

use std::time::{Duration, Instant};

use reqwest::{Client, StatusCode};
use tracing::{debug, info};
use url::Url;

use crate::error::ScrapeError;

/// Raw fetch result: body text plus the status code. The status is recorded
/// for logging; a non-success status is not an error at this layer. The
/// lookup site answers unknown accounts with a 200 page missing the data
/// tables, so table interpretation decides what the page means.
#[derive(Debug)]
pub struct Page {
    pub body: String,
    pub status: StatusCode,
}

/// Issue one GET bounded by `deadline`. No retries: on expiry the request
/// is abandoned and the run fails with `FetchTimeout`.
pub async fn fetch_page(
    client: &Client,
    url: &Url,
    deadline: Duration,
) -> Result<Page, ScrapeError> {
    debug!(%url, ?deadline, "fetching page");
    let started = Instant::now();
    let resp = client
        .get(url.clone())
        .timeout(deadline)
        .send()
        .await
        .map_err(|e| classify(e, url, deadline))?;
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| classify(e, url, deadline))?;
    info!(
        %url,
        status = %status,
        elapsed = ?started.elapsed(),
        bytes = body.len(),
        "page fetched"
    );
    Ok(Page { body, status })
}

fn classify(err: reqwest::Error, url: &Url, deadline: Duration) -> ScrapeError {
    if err.is_timeout() {
        ScrapeError::FetchTimeout {
            url: url.to_string(),
            deadline,
        }
    } else {
        ScrapeError::Http(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response on a local port, return the URL.
    async fn serve_once(status_line: &'static str, body: &'static str) -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            let (mut sock, _) = listener.accept().await.expect("accept");
            let mut buf = [0u8; 1024];
            let _ = sock.read(&mut buf).await;
            let resp = format!(
                "HTTP/1.1 {status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = sock.write_all(resp.as_bytes()).await;
        });
        Url::parse(&format!("http://{addr}/")).expect("url")
    }

    #[tokio::test]
    async fn returns_body_and_status() {
        let url = serve_once("200 OK", "<html><table></table></html>").await;
        let page = fetch_page(&Client::new(), &url, Duration::from_secs(5))
            .await
            .expect("fetch should succeed");
        assert_eq!(page.status, StatusCode::OK);
        assert_eq!(page.body, "<html><table></table></html>");
    }

    #[tokio::test]
    async fn non_success_status_is_recorded_not_fatal() {
        let url = serve_once("404 Not Found", "no such account").await;
        let page = fetch_page(&Client::new(), &url, Duration::from_secs(5))
            .await
            .expect("a 404 page still comes back as a page");
        assert_eq!(page.status, StatusCode::NOT_FOUND);
        assert_eq!(page.body, "no such account");
    }

    #[tokio::test]
    async fn deadline_expiry_is_fetch_timeout() {
        // accept the connection, then sit on it past the deadline
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        let hold = tokio::spawn(async move {
            let (sock, _) = listener.accept().await.expect("accept");
            tokio::time::sleep(Duration::from_secs(30)).await;
            drop(sock);
        });

        let url = Url::parse(&format!("http://{addr}/")).expect("url");
        let err = fetch_page(&Client::new(), &url, Duration::from_millis(50))
            .await
            .unwrap_err();
        assert!(matches!(err, ScrapeError::FetchTimeout { .. }));
        assert!(err.to_string().contains("timed out"));
        hold.abort();
    }

    #[tokio::test]
    async fn unreachable_host_is_http_not_timeout() {
        // bind then drop to get a port with nothing listening
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);

        let url = Url::parse(&format!("http://{addr}/")).expect("url");
        let err = fetch_page(&Client::new(), &url, Duration::from_secs(5))
            .await
            .unwrap_err();
        assert!(matches!(err, ScrapeError::Http(_)));
    }
}
