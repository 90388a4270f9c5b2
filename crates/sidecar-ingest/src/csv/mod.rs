//! CSV metadata generation.

mod dtype;
mod metadata;
mod reader;

pub use dtype::dtype_label;
pub use metadata::{describe_frame, generate_csv_metadata};
pub use reader::read_csv_frame;
