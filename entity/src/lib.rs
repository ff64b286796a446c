pub mod approval_decision;
pub mod approval_history;
pub mod assignment;
pub mod certificate;
pub mod crew;
pub mod document_checklist;
pub mod document_revision;
pub mod employment_application;
pub mod form_submission;
pub mod form_template;
pub mod managed_document;
pub mod owner;
pub mod sea_service;
pub mod staff_user;
pub mod vessel;

pub mod prelude {
    pub use crate::approval_decision::Entity as ApprovalDecision;
    pub use crate::approval_history::Entity as ApprovalHistory;
    pub use crate::assignment::Entity as Assignment;
    pub use crate::certificate::Entity as Certificate;
    pub use crate::crew::Entity as Crew;
    pub use crate::document_checklist::Entity as DocumentChecklist;
    pub use crate::document_revision::Entity as DocumentRevision;
    pub use crate::employment_application::Entity as EmploymentApplication;
    pub use crate::form_submission::Entity as FormSubmission;
    pub use crate::form_template::Entity as FormTemplate;
    pub use crate::managed_document::Entity as ManagedDocument;
    pub use crate::owner::Entity as Owner;
    pub use crate::sea_service::Entity as SeaService;
    pub use crate::staff_user::Entity as StaffUser;
    pub use crate::vessel::Entity as Vessel;
}
