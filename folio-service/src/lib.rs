pub mod error;
pub mod project;
pub mod taxonomy;

pub use error::ProjectError;

pub use project::{
    ProjectRecordManager, DefaultProjectRecordManager,
    ProjectSubmission, ProjectQuery, PageQuery, ProjectFormData, RecordOutcome,
};

pub use taxonomy::{
    TypeService, DefaultTypeService,
    TechnologyService, DefaultTechnologyService,
};
