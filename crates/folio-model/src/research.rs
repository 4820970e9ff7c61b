//! Research lab content types.

use serde::Serialize;

/// A peer-reviewed paper or article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Publication {
    pub title: &'static str,
    pub description: &'static str,
    pub venue: &'static str,
    pub year: &'static str,
    pub image_url: &'static str,
    pub scholar_url: &'static str,
}

/// One stage of the research pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PipelineStep {
    pub title: &'static str,
    pub description: &'static str,
}

/// Artwork of the research teaser on the main view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResearchTeaser {
    pub feature_image: &'static str,
    pub crops_image: &'static str,
    pub data_image: &'static str,
}

impl ResearchTeaser {
    pub fn image_urls(&self) -> [&'static str; 3] {
        [self.feature_image, self.crops_image, self.data_image]
    }
}

/// Label/value pair in the lab hero ("Primary Focus", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LabFact {
    pub label: &'static str,
    pub value: &'static str,
    pub note: Option<&'static str>,
}
