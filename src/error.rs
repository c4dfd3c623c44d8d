//! Startup validation errors
//!
//! Content and taxonomy are compiled in, so none of these can happen at
//! request time. They are raised once by the `validate_*` functions and the
//! host refuses to render when any of them is returned.

use thiserror::Error;

use crate::i18n::Language;
use crate::models::MoodQuadrant;

/// Shape mismatch or hole in the localized copy
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("section '{section}' has {left_len} entries in {left:?} but {right_len} in {right:?}")]
    LengthMismatch {
        section: &'static str,
        left: Language,
        left_len: usize,
        right: Language,
        right_len: usize,
    },

    #[error("navigation item {index} has id '{left_id}' in {left:?} but '{right_id}' in {right:?}")]
    NavIdMismatch {
        index: usize,
        left: Language,
        left_id: &'static str,
        right: Language,
        right_id: &'static str,
    },

    #[error("empty text in '{field}' for {language:?}")]
    EmptyText {
        field: String,
        language: Language,
    },
}

/// Defect in the mood catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxonomyError {
    #[error("duplicate emotion id '{0}'")]
    DuplicateId(String),

    #[error("quadrant {quadrant:?} has slot {found} at position {expected}")]
    SlotOutOfOrder {
        quadrant: MoodQuadrant,
        expected: usize,
        found: usize,
    },

    #[error("quadrant {0:?} has no emotions")]
    EmptyQuadrant(MoodQuadrant),

    #[error("quadrant {quadrant:?} has invalid color '{color}'")]
    InvalidColor {
        quadrant: MoodQuadrant,
        color: &'static str,
    },
}

/// Any configuration defect found at startup
#[derive(Debug, Error)]
pub enum Error {
    #[error("content: {0}")]
    Content(#[from] ContentError),

    #[error("taxonomy: {0}")]
    Taxonomy(#[from] TaxonomyError),
}

pub type Result<T> = std::result::Result<T, Error>;
