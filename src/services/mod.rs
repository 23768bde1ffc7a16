pub mod aggregate;
pub mod candidates;
pub mod catalog;
pub mod explain;
pub mod interests;
pub mod keys;
pub mod recommendations;

pub use catalog::{CatalogProvider, OpenLibraryClient};
pub use explain::CatalogLinks;
pub use recommendations::Recommender;
