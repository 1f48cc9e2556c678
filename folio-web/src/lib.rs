pub mod app_state;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routes;


pub use app_state::AppState;
pub use error::ApiError;
pub use handlers::*;
pub use routes::admin_routes;
