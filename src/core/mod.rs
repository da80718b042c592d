pub mod calculator;
pub mod catalog;
pub mod fetch;
pub mod forms;
pub mod store;
pub mod views;

pub use crate::domain::model::{
    Category, PostRecord, ServiceDraft, ServicePatch, ServiceRecord, Stage, WorkshopDraft,
    WorkshopPatch, WorkshopRecord,
};
pub use crate::domain::ports::{Notifier, Repository, SubmissionGateway};
pub use crate::utils::error::Result;
