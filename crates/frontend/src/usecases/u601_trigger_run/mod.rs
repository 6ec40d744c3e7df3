//! u601: manual trigger of a workflow run from a modal form

pub mod form;
pub mod model;
pub mod page;
pub mod view_model;

pub use form::TriggerRunForm;
pub use page::TriggerRunPage;
pub use view_model::TriggerRunFormVm;
