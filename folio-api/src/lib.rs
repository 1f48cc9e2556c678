pub mod pagination;
pub mod security;

pub use pagination::{ListOptions, ListResult, DEFAULT_PAGE_SIZE};
pub use security::Actor;
