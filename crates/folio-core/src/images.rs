//! Per-URL image load status.
//!
//! The cache is generic over the decoded handle so the core stays free of
//! any toolkit types. A failed load is remembered so the view can show a
//! placeholder without retrying.

use std::collections::HashMap;
use std::fmt::Display;

use serde::Serialize;

/// Load state of one image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageStatus {
    Pending,
    Ready,
    Failed,
}

#[derive(Debug, Clone)]
enum Entry<H> {
    Pending,
    Ready(H),
    Failed,
}

/// Image handles keyed by source URL.
#[derive(Debug, Clone)]
pub struct ImageCache<H> {
    entries: HashMap<String, Entry<H>>,
}

impl<H> Default for ImageCache<H> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<H> ImageCache<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `url` as requested. Returns true when the caller should start a
    /// load, false when the URL is already pending, ready, or failed.
    pub fn request(&mut self, url: &str) -> bool {
        if self.entries.contains_key(url) {
            return false;
        }
        self.entries.insert(url.to_string(), Entry::Pending);
        true
    }

    /// Record the outcome of a load.
    pub fn resolve<E: Display>(&mut self, url: &str, result: Result<H, E>) {
        let entry = match result {
            Ok(handle) => Entry::Ready(handle),
            Err(error) => {
                tracing::warn!(url, %error, "image unavailable, using placeholder");
                Entry::Failed
            }
        };
        self.entries.insert(url.to_string(), entry);
    }

    /// Status of `url`; never-requested URLs report `Pending`.
    pub fn status(&self, url: &str) -> ImageStatus {
        match self.entries.get(url) {
            None | Some(Entry::Pending) => ImageStatus::Pending,
            Some(Entry::Ready(_)) => ImageStatus::Ready,
            Some(Entry::Failed) => ImageStatus::Failed,
        }
    }

    pub fn get(&self, url: &str) -> Option<&H> {
        match self.entries.get(url) {
            Some(Entry::Ready(handle)) => Some(handle),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Local file name for an image URL.
///
/// Takes the last path segment with any query or fragment removed, and adds
/// `.jpg` when the segment has no extension of its own. Returns `None` when
/// the URL has no usable segment.
pub fn asset_file_name(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    let segment = path.rsplit('/').next().unwrap_or_default();
    if segment.is_empty() || segment.contains(':') {
        return None;
    }
    if segment.contains('.') {
        Some(segment.to_string())
    } else {
        Some(format!("{segment}.jpg"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_only_once() {
        let mut cache: ImageCache<u8> = ImageCache::new();
        assert!(cache.request("a"));
        assert!(!cache.request("a"));
        assert_eq!(cache.status("a"), ImageStatus::Pending);
    }

    #[test]
    fn failure_is_remembered() {
        let mut cache: ImageCache<u8> = ImageCache::new();
        cache.request("a");
        cache.resolve::<&str>("a", Err("not found"));
        assert_eq!(cache.status("a"), ImageStatus::Failed);
        assert!(!cache.request("a"));
        assert!(cache.get("a").is_none());
    }

    #[test]
    fn ready_handle_is_returned() {
        let mut cache = ImageCache::new();
        cache.resolve::<&str>("a", Ok(7u8));
        assert_eq!(cache.get("a"), Some(&7));
        assert_eq!(cache.status("a"), ImageStatus::Ready);
    }

    #[test]
    fn file_name_strips_query() {
        assert_eq!(
            asset_file_name(
                "https://images.unsplash.com/photo-1514320291840-2e0a9bf2a9ae?q=80&w=2070&auto=format&fit=crop"
            ),
            Some("photo-1514320291840-2e0a9bf2a9ae.jpg".to_string())
        );
    }

    #[test]
    fn file_name_keeps_existing_extension() {
        assert_eq!(asset_file_name("/profile.jpeg"), Some("profile.jpeg".to_string()));
    }

    #[test]
    fn file_name_rejects_empty_segment() {
        assert_eq!(asset_file_name("https://example.com/"), None);
        assert_eq!(asset_file_name(""), None);
    }
}
