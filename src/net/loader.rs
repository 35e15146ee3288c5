/// Remote image loader
///
/// Performs one HTTP GET against the configured endpoint and decodes the
/// body into an RGBA bitmap. Validation lives in `handle_response`, which
/// is pure so the status/body/decode rules are testable without a network.

use std::time::Duration;

use log::debug;
use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::config::Config;
use crate::state::data::FetchedImage;

use super::ImageSource;

/// Everything that can go wrong between "send GET" and "hold a bitmap"
///
/// Every failure path yields one of these; nothing is silently collapsed
/// into an absent image. Callers decide whether to ignore the error.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS, or timeout failure in the HTTP client
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered outside the 200-299 range
    #[error("server returned status {0}")]
    Status(StatusCode),

    /// A 2xx response with a zero-length body
    #[error("response body was empty")]
    EmptyBody,

    /// The body was not a supported raster image format
    #[error("could not decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Production `ImageSource` backed by reqwest
pub struct ImageLoader {
    client: Client,
    url: String,
}

impl ImageLoader {
    /// Build a loader from the application configuration
    ///
    /// The request timeout comes from the config; everything else uses
    /// the client defaults. No retries, no caching.
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            url: config.image_url.clone(),
        })
    }
}

impl ImageSource for ImageLoader {
    async fn fetch(&self) -> Result<FetchedImage, FetchError> {
        debug!("GET {}", self.url);

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        handle_response(status, &body)
    }
}

/// Validate one HTTP response and decode it
///
/// Rules, in order:
/// - status must lie in [200, 299]
/// - body must be non-empty
/// - body must decode as a supported raster format
fn handle_response(status: StatusCode, body: &[u8]) -> Result<FetchedImage, FetchError> {
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    if body.is_empty() {
        return Err(FetchError::EmptyBody);
    }

    let decoded = image::load_from_memory(body)?;
    Ok(FetchedImage::from_rgba(decoded.to_rgba8()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Encode a small solid-color PNG entirely in memory
    fn png_bytes() -> Vec<u8> {
        let rgba = image::RgbaImage::from_pixel(4, 4, image::Rgba([200, 40, 40, 255]));
        let mut cursor = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgba8(rgba)
            .write_to(&mut cursor, image::ImageFormat::Png)
            .unwrap();
        cursor.into_inner()
    }

    fn loader_for(url: &str) -> ImageLoader {
        let config = Config {
            image_url: url.to_string(),
            ..Config::default()
        };
        ImageLoader::new(&config).unwrap()
    }

    /// Serve exactly one canned HTTP/1.1 response on an ephemeral port
    async fn serve_once(status_line: &'static str, body: Vec<u8>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            // Drain the request head before answering
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;

            let header = format!(
                "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                status_line,
                body.len()
            );
            socket.write_all(header.as_bytes()).await.unwrap();
            socket.write_all(&body).await.unwrap();
        });

        format!("http://{}", addr)
    }

    #[test]
    fn test_handle_response_decodes_valid_png() {
        let bytes = png_bytes();
        let fetched = handle_response(StatusCode::OK, &bytes).unwrap();

        // Pixel-for-pixel identical to the canonical decode
        let canonical = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(fetched.width, canonical.width());
        assert_eq!(fetched.height, canonical.height());
        assert_eq!(fetched.pixels, canonical.into_raw());
    }

    #[test]
    fn test_handle_response_accepts_whole_2xx_range() {
        let bytes = png_bytes();
        for code in [200, 204, 299] {
            let status = StatusCode::from_u16(code).unwrap();
            assert!(handle_response(status, &bytes).is_ok(), "status {}", code);
        }
    }

    #[test]
    fn test_handle_response_rejects_non_2xx() {
        let bytes = png_bytes();
        for code in [199, 300, 404, 500] {
            let status = StatusCode::from_u16(code).unwrap();
            let err = handle_response(status, &bytes).unwrap_err();
            assert!(matches!(err, FetchError::Status(s) if s.as_u16() == code));
        }
    }

    #[test]
    fn test_handle_response_rejects_empty_body() {
        let err = handle_response(StatusCode::OK, &[]).unwrap_err();
        assert!(matches!(err, FetchError::EmptyBody));
    }

    #[test]
    fn test_handle_response_rejects_corrupt_bytes() {
        // Truncating a PNG after the signature breaks the decoder
        let mut bytes = png_bytes();
        bytes.truncate(12);

        let err = handle_response(StatusCode::OK, &bytes).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_downloads_and_decodes() {
        let bytes = png_bytes();
        let url = serve_once("200 OK", bytes.clone()).await;

        let fetched = loader_for(&url).fetch().await.unwrap();

        let canonical = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(fetched.pixels, canonical.into_raw());
    }

    #[tokio::test]
    async fn test_fetch_surfaces_http_status() {
        let url = serve_once("404 Not Found", b"gone".to_vec()).await;

        let err = loader_for(&url).fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::Status(s) if s == StatusCode::NOT_FOUND));
    }
}
