//! JSON metadata generation.

mod metadata;
mod reader;

pub use metadata::{describe_records, generate_json_metadata, value_type_label};
pub use reader::read_json_records;
