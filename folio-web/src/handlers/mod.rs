pub mod projects;
pub mod types;
pub mod technologies;
pub mod health;

pub use projects::*;
pub use types::*;
pub use technologies::*;
pub use health::*;
