pub mod catalog;
pub mod search;

pub use catalog::{Catalog, InMemoryCatalog};
pub use search::{find_by_name, search};
