//! Image loading collaborator
//!
//! The composer only references images by URL. Turning a URL into something
//! drawable happens off the update loop: [`ImageLoader`] implementations run
//! inside spawned tokio tasks and report back through `Message::ImageLoaded`
//! / `Message::ImageFailed`. [`ImageCache`] remembers what was requested so
//! every URL is loaded at most once per session.

use std::collections::HashMap;
use std::time::Duration;

use bloom_core::prelude::*;
use bloom_core::{ImageInfo, ImageStatus};
use url::Url;

/// Resolves an image URL into a drawable description
#[trait_variant::make(ImageLoader: Send)]
pub trait LocalImageLoader {
    /// Load one image. Errors are reported, never shown to the user.
    async fn load(&self, url: &str) -> Result<ImageInfo>;
}

/// Loader that never touches the network.
///
/// It validates the URL and derives a short label (`pexels #2132227`) from
/// its host and path, optionally after a simulated delay.
#[derive(Debug, Clone, Default)]
pub struct OfflineImageLoader {
    latency: Duration,
}

impl OfflineImageLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: simulated per-image delay
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

impl ImageLoader for OfflineImageLoader {
    async fn load(&self, url: &str) -> Result<ImageInfo> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        describe_url(url)
    }
}

/// Parse an image URL into an [`ImageInfo`]
pub fn describe_url(raw: &str) -> Result<ImageInfo> {
    let url = Url::parse(raw).map_err(|_| Error::invalid_image_url(raw))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::invalid_image_url(raw));
    }

    let host = url
        .host_str()
        .ok_or_else(|| Error::invalid_image_url(raw))?
        .to_string();

    // "images.pexels.com" -> "pexels"
    let site = host
        .rsplit('.')
        .nth(1)
        .unwrap_or(host.as_str())
        .to_string();

    let segments: Vec<&str> = url
        .path_segments()
        .map(|s| s.filter(|seg| !seg.is_empty()).collect())
        .unwrap_or_default();

    let photo_id = segments
        .iter()
        .find(|seg| !seg.is_empty() && seg.chars().all(|c| c.is_ascii_digit()));

    let label = match (photo_id, segments.last()) {
        (Some(id), _) => format!("{site} #{id}"),
        (None, Some(file)) => format!("{site} {file}"),
        (None, None) => return Err(Error::image_load(raw, "URL has no image path")),
    };

    Ok(ImageInfo { host, label })
}

/// Load status per URL, for the whole session
#[derive(Debug, Clone, Default)]
pub struct ImageCache {
    entries: HashMap<String, ImageStatus>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current status; unknown URLs are `Pending`
    pub fn status(&self, url: &str) -> ImageStatus {
        self.entries.get(url).cloned().unwrap_or_default()
    }

    pub fn is_requested(&self, url: &str) -> bool {
        self.entries.contains_key(url)
    }

    /// Mark unseen URLs as requested and return them (deduplicated, in order)
    pub fn request_missing<'a>(&mut self, urls: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let mut fresh = Vec::new();
        for url in urls {
            if !self.entries.contains_key(url) {
                self.entries.insert(url.to_string(), ImageStatus::Pending);
                fresh.push(url.to_string());
            }
        }
        fresh
    }

    pub fn resolve(&mut self, url: impl Into<String>, info: ImageInfo) {
        self.entries.insert(url.into(), ImageStatus::Ready(info));
    }

    pub fn fail(&mut self, url: impl Into<String>) {
        self.entries.insert(url.into(), ImageStatus::Failed);
    }

    /// Number of images that finished loading
    pub fn ready_count(&self) -> usize {
        self.entries
            .values()
            .filter(|s| matches!(s, ImageStatus::Ready(_)))
            .count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
