pub mod record_manager;
pub mod submission;

pub use record_manager::{ProjectRecordManager, DefaultProjectRecordManager};
pub use submission::{ProjectSubmission, ProjectQuery, PageQuery, ProjectFormData, RecordOutcome};
