//! UI module - contains UI rendering components

pub mod about;
pub mod carousel;
pub mod mood_grid;
pub mod sections;
pub mod text;

pub use about::AboutDialog;
pub use carousel::CarouselAction;
pub use text::{host_text, HostText};
