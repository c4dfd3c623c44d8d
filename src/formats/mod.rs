pub mod csv;

pub use self::csv::{catalog_to_csv_string, write_catalog_csv};
