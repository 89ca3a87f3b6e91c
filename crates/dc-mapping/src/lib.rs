/// Mapping documents for dotcell: load, enrich with braille cells, write JSON.
pub mod convert;
pub mod document;
pub mod enrich;
pub mod loader;
pub mod writer;

pub use convert::{convert_file, default_output_path};
pub use document::{EnrichedDocument, EnrichedEntry, MappingDocument, MappingEntry};
pub use enrich::{ConversionReport, enrich_document, enrich_entry};
pub use loader::{SourceFormat, load_document};
pub use writer::write_document;
