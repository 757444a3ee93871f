pub mod collection;

pub use collection::{Collection, Item, RequestItem};
