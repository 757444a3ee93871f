pub mod collection;

pub use collection::{load_collection, parse_collection};
