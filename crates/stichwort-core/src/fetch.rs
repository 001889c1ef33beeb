use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::error::LookupError;

/// Page body transport. The resolver only ever talks to this trait, so
/// lookups run against stub page maps in tests.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Fetch `url` and return the decoded body
    async fn get_text(&self, url: &str) -> Result<String, LookupError>;
}

/// `reqwest`-backed fetcher with a tight per-request timeout and a
/// bounded retry loop for timeouts.
pub struct Fetcher {
    client: reqwest::Client,
    timeout: Duration,
    max_attempts: u32,
}

impl Fetcher {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(800);
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

    pub fn new(timeout: Duration, max_attempts: u32) -> Self {
        Self {
            client: reqwest::Client::new(),
            timeout,
            max_attempts: max_attempts.max(1),
        }
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TIMEOUT, Self::DEFAULT_MAX_ATTEMPTS)
    }
}

#[async_trait]
impl Fetch for Fetcher {
    async fn get_text(&self, url: &str) -> Result<String, LookupError> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            let outcome: Result<Option<String>, reqwest::Error> = async {
                let response = self.client.get(url).timeout(self.timeout).send().await?;
                if response.status() == StatusCode::NOT_FOUND {
                    return Ok(None);
                }
                let body = response.error_for_status()?.text().await?;
                Ok(Some(body))
            }
            .await;

            match outcome {
                Ok(Some(body)) => return Ok(body),
                Ok(None) => return Err(LookupError::word_not_available(url)),
                Err(err) if err.is_timeout() && attempt < self.max_attempts => {
                    tracing::warn!("{url} timed out, retrying ({attempt}/{})", self.max_attempts);
                }
                Err(err) if err.is_timeout() => {
                    return Err(LookupError::Timeout {
                        url: url.to_owned(),
                        attempts: attempt,
                    });
                }
                Err(err) => return Err(LookupError::Transport(err)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;

    async fn one_shot_server(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf).await;
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.ok();
        });
        format!("http://{addr}/wb/wort")
    }

    #[tokio::test]
    async fn success_returns_the_body() {
        let url = one_shot_server(
            "HTTP/1.1 200 OK\r\ncontent-length: 5\r\nconnection: close\r\n\r\nhallo",
        )
        .await;
        let fetcher = Fetcher::new(Duration::from_secs(2), 1);
        assert_eq!(fetcher.get_text(&url).await.unwrap(), "hallo");
    }

    #[tokio::test]
    async fn not_found_becomes_word_not_available() {
        let url = one_shot_server(
            "HTTP/1.1 404 Not Found\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
        )
        .await;
        let fetcher = Fetcher::new(Duration::from_secs(2), 1);
        let err = fetcher.get_text(&url).await.unwrap_err();
        assert!(matches!(err, LookupError::WordNotAvailable { ref origin } if origin == "127.0.0.1"));
    }

    #[tokio::test]
    async fn server_error_is_a_transport_failure() {
        let url = one_shot_server(
            "HTTP/1.1 500 Internal Server Error\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
        )
        .await;
        let fetcher = Fetcher::new(Duration::from_secs(2), 1);
        let err = fetcher.get_text(&url).await.unwrap_err();
        assert!(matches!(err, LookupError::Transport(_)));
    }

    #[tokio::test]
    async fn timeouts_retry_up_to_the_bound() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let mut held = Vec::new();
            loop {
                let (stream, _) = listener.accept().await.unwrap();
                // hold the connection open without ever answering
                held.push(stream);
            }
        });

        let fetcher = Fetcher::new(Duration::from_millis(50), 3);
        let err = fetcher.get_text(&format!("http://{addr}/")).await.unwrap_err();
        assert!(matches!(err, LookupError::Timeout { attempts: 3, .. }));
    }
}
