pub mod content;
pub mod diff;
pub mod history;
pub mod lifecycle;
pub mod store;
pub mod tree;

pub use store::{RepositoryStore, SharedStore};
