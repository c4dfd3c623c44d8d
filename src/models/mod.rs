pub mod catalog;
pub mod mood;
pub mod taxonomy;

pub use mood::{Emphasis, MoodEmotion, MoodQuadrant, QuadrantFilter, QuadrantMeta, Rgb};
pub use taxonomy::{GridCell, MoodTaxonomy, NamePair, QuadrantLists};
