pub mod type_service;
pub mod technology_service;

pub use type_service::{TypeService, DefaultTypeService};
pub use technology_service::{TechnologyService, DefaultTechnologyService};
