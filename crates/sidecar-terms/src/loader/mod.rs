//! Library loaders.

mod catalog;
mod chain;
mod source;

pub use catalog::CatalogLoader;
pub use chain::ChainLoader;
pub use source::SourceLoader;
