//! Localized content and mood-meter engine for the Auto Zen Garden landing page

pub mod controller;
pub mod error;
pub mod formats;
pub mod i18n;
pub mod models;

use tracing::error;

/// Grid and carousel constants
pub mod limits {
    pub use crate::controller::{DEFAULT_AUTOPLAY_INTERVAL, MIN_AUTOPLAY_ITEMS};
    pub use crate::models::taxonomy::{BADGES_PER_ROW, ROWS_PER_QUADRANT};
}

// Re-export commonly used types
pub use controller::{ControllerConfig, PresentationController, UiState};
pub use error::{ContentError, Error, TaxonomyError};
pub use formats::{catalog_to_csv_string, write_catalog_csv};
pub use i18n::{content, validate_content, validate_trees, ContentSource, ContentTree, Language};
pub use models::taxonomy::validate_taxonomy;
pub use models::{MoodEmotion, MoodQuadrant, MoodTaxonomy, QuadrantFilter};

/// Build the reference taxonomy and check both data sources. A defect here
/// is a build-time mistake in the compiled-in copy; callers must not render.
pub fn load_reference() -> error::Result<MoodTaxonomy> {
    load_with(content)
}

/// Same as [`load_reference`] with the copy resolved through `source`
pub fn load_with(source: ContentSource) -> error::Result<MoodTaxonomy> {
    validate_trees(source).inspect_err(|e| error!("content validation failed: {}", e))?;
    let taxonomy = MoodTaxonomy::reference();
    validate_taxonomy(&taxonomy).inspect_err(|e| error!("taxonomy validation failed: {}", e))?;
    Ok(taxonomy)
}
