//! Slide data for carousels.

use serde::{Deserialize, Serialize};

use crate::project::GalleryImage;
use crate::research::Publication;

/// How a carousel labels and decorates its slides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarouselMode {
    /// Experiment imagery; venue and year are not shown.
    #[default]
    Gallery,
    /// Published work; venue and year chips are shown.
    Publication,
}

impl CarouselMode {
    /// Eyebrow label shown above each slide title.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Gallery => "Experiment Log",
            Self::Publication => "Published Research",
        }
    }

    pub fn shows_venue(&self) -> bool {
        matches!(self, Self::Publication)
    }
}

/// One slide's data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CarouselItem {
    pub image_url: &'static str,
    pub title: &'static str,
    pub description: Option<&'static str>,
    pub venue: Option<&'static str>,
    pub year: Option<&'static str>,
}

impl CarouselItem {
    pub const fn new(image_url: &'static str, title: &'static str) -> Self {
        Self {
            image_url,
            title,
            description: None,
            venue: None,
            year: None,
        }
    }

    pub const fn with_description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }
}

impl From<&GalleryImage> for CarouselItem {
    fn from(image: &GalleryImage) -> Self {
        Self::new(image.url, image.caption)
    }
}

impl From<&Publication> for CarouselItem {
    fn from(publication: &Publication) -> Self {
        Self {
            image_url: publication.image_url,
            title: publication.title,
            description: Some(publication.description),
            venue: Some(publication.venue),
            year: Some(publication.year),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallery_caption_becomes_title() {
        let image = GalleryImage {
            url: "https://example.com/a.jpg",
            caption: "Dashboard",
        };
        let item = CarouselItem::from(&image);
        assert_eq!(item.title, "Dashboard");
        assert_eq!(item.description, None);
        assert_eq!(item.venue, None);
    }

    #[test]
    fn publication_mode_shows_venue() {
        assert!(CarouselMode::Publication.shows_venue());
        assert!(!CarouselMode::Gallery.shows_venue());
        assert_eq!(CarouselMode::Gallery.label(), "Experiment Log");
    }
}
