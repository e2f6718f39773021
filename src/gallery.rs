//! Gallery
//!
//! Non-visual side of the design history page: counts, date labels, the
//! selected design, and exporting a design's image to a file.

pub mod export;
pub mod view;

pub use export::{export_filename, FileExporter, ImageExporter};
pub use view::{format_timestamp, GalleryView};
