pub mod portfolio;

pub use portfolio::{
    slugify,
    Project, ProjectDetails,
    ProjectType, Technology,
    ProjectForm, ProjectFields, TaxonomyForm, TechnologyUpdateIntent, ValidationFailure,
};
