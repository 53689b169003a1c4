//! fetch::image
//!
//! Streaming image download.
//!
//! # Design
//!
//! The response body is streamed into the destination file chunk by chunk
//! rather than buffered in memory. The file handle is closed on both
//! success and error paths, and on any failure the destination is removed
//! (best-effort) so a partial file never remains with misleading content.

use std::path::Path;

use reqwest::header::ACCEPT;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use super::{FetchError, Fetcher};

impl Fetcher {
    /// Download an image to `dest`, streaming the body as it arrives.
    ///
    /// # Errors
    ///
    /// `Status`, `Transport`, or `Io`. On error the destination file is
    /// removed; removal failure is itself ignored.
    pub async fn download(&self, url: &str, dest: &Path) -> Result<(), FetchError> {
        match self.stream_to_file(url, dest).await {
            Ok(()) => Ok(()),
            Err(e) => {
                let _ = tokio::fs::remove_file(dest).await;
                Err(e)
            }
        }
    }

    async fn stream_to_file(&self, url: &str, dest: &Path) -> Result<(), FetchError> {
        // Image hosts can 406 the JSON accept header used for metadata.
        let mut response = self
            .client()
            .get(url)
            .header(ACCEPT, "*/*")
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let mut file = File::create(dest).await?;
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?
        {
            file.write_all(&chunk).await?;
        }
        file.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn writes_the_full_body_to_the_destination() {
        let body = vec![0xffu8, 0xd8, 0xff, 0xe0, 1, 2, 3, 4];
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/img/1.jpg"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(body.clone()))
            .mount(&server)
            .await;

        let dir = tempdir().unwrap();
        let dest = dir.path().join("1.jpg");
        let fetcher = Fetcher::new().unwrap();
        fetcher
            .download(&format!("{}/img/1.jpg", server.uri()), &dest)
            .await
            .unwrap();

        assert_eq!(std::fs::read(&dest).unwrap(), body);
    }

    #[tokio::test]
    async fn image_request_accepts_any_content_type() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(wiremock::matchers::header("accept", "*/*"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"img".to_vec()))
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempdir().unwrap();
        let dest = dir.path().join("any.jpg");
        let fetcher = Fetcher::new().unwrap();
        fetcher.download(&server.uri(), &dest).await.unwrap();
    }

    #[tokio::test]
    async fn failed_download_leaves_no_file_behind() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let dir = tempdir().unwrap();
        let dest = dir.path().join("gone.png");
        // Simulate a partially-written file from an interrupted transfer.
        std::fs::write(&dest, b"partial").unwrap();

        let fetcher = Fetcher::new().unwrap();
        let result = fetcher.download(&server.uri(), &dest).await;

        assert!(matches!(result, Err(FetchError::Status { status: 404, .. })));
        assert!(!dest.exists());
    }

    #[tokio::test]
    async fn unwritable_destination_is_an_io_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"img".to_vec()))
            .mount(&server)
            .await;

        let dir = tempdir().unwrap();
        let dest = dir.path().join("no-such-dir").join("x.jpg");
        let fetcher = Fetcher::new().unwrap();

        let result = fetcher.download(&server.uri(), &dest).await;
        assert!(matches!(result, Err(FetchError::Io(_))));
        assert!(!dest.exists());
    }
}
