// SPDX-License-Identifier: MPL-2.0
//! HTTP access to the gallery server.
//!
//! Endpoints:
//! - `GET /` gallery index
//! - `GET /thumbnail/{id}`
//! - `GET /image/{id}`, and `GET /image/{id}?retry=1` to ask for re-encoding
//! - `POST /context/` with `{"id": n}`
//!
//! Image bytes are decoded on tokio's blocking pool so the UI thread only
//! ever receives ready-to-draw pixels.

use super::decoded::DecodedImage;
use super::index::{GalleryIndex, ImageId};
use crate::error::{Error, Result};
use crate::lightbox::{Attempt, ImageRequest};
use reqwest::{Client, Url};
use std::time::Duration;

const USER_AGENT: &str = concat!("GalleryLightbox/", env!("CARGO_PKG_VERSION"));
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Cheap to clone: the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct GalleryClient {
    base: Url,
    http: Client,
}

impl GalleryClient {
    /// Creates a client for the server at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the URL is not an absolute `http(s)`
    /// URL, and [`Error::Http`] if the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base = Url::parse(base_url.trim())
            .map_err(|err| Error::Config(format!("invalid server url {base_url:?}: {err}")))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "unsupported scheme {:?} in server url",
                base.scheme()
            )));
        }
        // Endpoints are joined relative to the base, which needs a trailing slash.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(CONNECT_TIMEOUT)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;

        Ok(Self { base, http })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    #[must_use]
    pub fn thumbnail_url(&self, id: ImageId) -> String {
        self.endpoint(&format!("thumbnail/{id}"))
    }

    #[must_use]
    pub fn image_url(&self, id: ImageId, attempt: Attempt) -> String {
        let url = self.endpoint(&format!("image/{id}"));
        match attempt {
            Attempt::Initial => url,
            Attempt::Reencode => format!("{url}?retry=1"),
        }
    }

    #[must_use]
    pub fn context_url(&self) -> String {
        self.endpoint("context/")
    }

    fn endpoint(&self, path: &str) -> String {
        match self.base.join(path) {
            Ok(url) => url.into(),
            Err(_) => format!("{}{}", self.base, path),
        }
    }

    pub async fn fetch_index(&self) -> Result<GalleryIndex> {
        tracing::debug!(url = %self.base, "fetching gallery index");
        let html = self
            .http
            .get(self.base.clone())
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        GalleryIndex::parse(&html)
    }

    pub async fn fetch_thumbnail(&self, id: ImageId) -> Result<DecodedImage> {
        let url = self.thumbnail_url(id);
        tracing::debug!(%url, "fetching thumbnail");
        self.fetch_decoded(url).await
    }

    pub async fn fetch_image(&self, request: ImageRequest) -> Result<DecodedImage> {
        let url = self.image_url(request.id, request.attempt);
        tracing::debug!(%url, generation = request.generation, "fetching image");
        self.fetch_decoded(url).await
    }

    /// Notifies the server that the image was right-clicked.
    ///
    /// The JSON answer carries nothing the client acts on; it is returned
    /// only so callers can log it.
    pub async fn open_context(&self, id: ImageId) -> Result<serde_json::Value> {
        let url = self.context_url();
        tracing::debug!(%url, %id, "posting context action");
        let answer = self
            .http
            .post(url)
            .json(&serde_json::json!({ "id": id.value() }))
            .send()
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await?;
        Ok(answer)
    }

    async fn fetch_decoded(&self, url: String) -> Result<DecodedImage> {
        let bytes = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        tokio::task::spawn_blocking(move || DecodedImage::from_bytes(&bytes))
            .await
            .map_err(|err| Error::Decode(err.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> GalleryClient {
        GalleryClient::new(base).expect("valid base url")
    }

    #[test]
    fn builds_endpoint_urls() {
        let client = client("http://localhost:8989");
        let id = ImageId::new(7);
        assert_eq!(client.thumbnail_url(id), "http://localhost:8989/thumbnail/7");
        assert_eq!(
            client.image_url(id, Attempt::Initial),
            "http://localhost:8989/image/7"
        );
        assert_eq!(
            client.image_url(id, Attempt::Reencode),
            "http://localhost:8989/image/7?retry=1"
        );
        assert_eq!(client.context_url(), "http://localhost:8989/context/");
    }

    #[test]
    fn keeps_base_path_prefix() {
        let client = client("https://nas.lan/gallery");
        assert_eq!(client.base_url().as_str(), "https://nas.lan/gallery/");
        assert_eq!(
            client.thumbnail_url(ImageId::new(1)),
            "https://nas.lan/gallery/thumbnail/1"
        );
    }

    #[test]
    fn rejects_non_http_urls() {
        assert!(matches!(
            GalleryClient::new("ftp://example.com"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            GalleryClient::new("not a url"),
            Err(Error::Config(_))
        ));
    }
}
