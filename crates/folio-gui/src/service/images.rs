//! Artwork loading.
//!
//! Image URLs in the content are mapped to files in the local assets
//! directory; nothing is fetched over the network.
//!
//! ```ignore
//! Task::perform(
//!     load_image(assets_dir.clone(), url),
//!     move |result| Message::ImageLoaded { url, result },
//! )
//! ```

use std::path::{Path, PathBuf};

use folio_core::asset_file_name;
use folio_model::content::{PROFILE, PROJECTS, PUBLICATIONS, RESEARCH_GALLERY, RESEARCH_TEASER};
use iced::widget::image;

use crate::error::GuiError;

/// Every image URL the pages can show, without duplicates.
pub fn content_image_urls() -> Vec<&'static str> {
    let mut urls: Vec<&'static str> = std::iter::once(PROFILE.portrait_url)
        .chain(RESEARCH_TEASER.image_urls())
        .chain(PROJECTS.iter().map(|project| project.image_url))
        .chain(
            PROJECTS
                .iter()
                .flat_map(|project| project.gallery().iter().map(|image| image.url)),
        )
        .chain(RESEARCH_GALLERY.iter().map(|item| item.image_url))
        .chain(PUBLICATIONS.iter().map(|publication| publication.image_url))
        .collect();
    let mut seen = std::collections::HashSet::new();
    urls.retain(|url| seen.insert(*url));
    urls
}

/// Path of the local file backing `url`.
pub fn asset_path(assets_dir: &Path, url: &str) -> Result<PathBuf, GuiError> {
    asset_file_name(url)
        .map(|name| assets_dir.join(name))
        .ok_or_else(|| GuiError::AssetUnmapped {
            url: url.to_string(),
        })
}

/// Load and decode an artwork file into an image handle.
///
/// Decoding runs on the blocking pool so an unreadable or corrupt file
/// surfaces here as an error rather than as a blank widget later.
pub async fn load_image(
    assets_dir: PathBuf,
    url: &'static str,
) -> Result<image::Handle, GuiError> {
    let path = asset_path(&assets_dir, url)?;
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|error| GuiError::asset_load(&path, error))?;
    let handle = tokio::task::spawn_blocking(move || decode_image(&path, &bytes))
        .await
        .map_err(|error| GuiError::internal(format!("image decode task failed: {error}")))??;
    tracing::debug!(url, "image loaded");
    Ok(handle)
}

/// Decode encoded image bytes into an RGBA handle.
pub fn decode_image(path: &Path, bytes: &[u8]) -> Result<image::Handle, GuiError> {
    let decoded = ::image::load_from_memory(bytes)
        .map_err(|error| GuiError::asset_load(path, error))?
        .into_rgba8();
    let (width, height) = decoded.dimensions();
    Ok(image::Handle::from_rgba(width, height, decoded.into_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_unique_and_include_the_portrait() {
        let urls = content_image_urls();
        assert!(urls.contains(&PROFILE.portrait_url));
        let unique: std::collections::HashSet<_> = urls.iter().collect();
        assert_eq!(unique.len(), urls.len());
    }

    #[test]
    fn every_content_url_maps_to_a_file() {
        for url in content_image_urls() {
            assert!(asset_path(Path::new("assets"), url).is_ok(), "{url}");
        }
    }

    #[test]
    fn garbage_bytes_do_not_decode() {
        let error = decode_image(Path::new("assets/a.jpg"), b"not an image").unwrap_err();
        assert!(matches!(error, GuiError::AssetLoad { .. }));
    }

    #[test]
    fn png_bytes_decode() {
        let mut bytes = Vec::new();
        ::image::RgbaImage::new(2, 3)
            .write_to(
                &mut std::io::Cursor::new(&mut bytes),
                ::image::ImageFormat::Png,
            )
            .unwrap();
        assert!(decode_image(Path::new("assets/a.png"), &bytes).is_ok());
    }

    #[test]
    fn unmapped_url_is_reported() {
        let error = asset_path(Path::new("assets"), "https://example.com/").unwrap_err();
        assert!(matches!(error, GuiError::AssetUnmapped { .. }));
    }
}
