//! Struct `Sample` represents a labeled table of records.

// Provides the attribute (column header) struct.
pub(crate) mod attribute;
// Provides a single record.
pub(crate) mod instance;
// Provides sample struct.
pub(crate) mod sample_struct;
// Provides a borrowed subset of a sample.
pub(crate) mod sample_view;

// Provides a struct that reads a file.
pub(crate) mod sample_reader;


pub use attribute::{Attribute, AttributeKind};
pub use instance::{Instance, MISSING};
pub use sample_struct::Sample;
pub use sample_view::SampleView;
pub use sample_reader::SampleReader;
