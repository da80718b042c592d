pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::SiteConfig;

pub use crate::core::calculator::{format_usd, LeadInputs, LeadProjection};
pub use crate::core::catalog::{
    builtin_posts, load_posts, load_posts_from_file, ServiceCatalog, WorkshopCatalog,
};
pub use crate::core::fetch::{run_fetch, FetchState, Fetcher};
pub use crate::core::forms::{
    FormDefinition, FormSession, LogNotifier, SimulatedGateway, SubmissionOutcome,
};
pub use crate::core::store::LatencyProfile;
pub use crate::domain::model::{
    Category, PostRecord, ServiceDraft, ServicePatch, ServiceRecord, Stage, WorkshopDraft,
    WorkshopPatch, WorkshopRecord,
};
pub use crate::domain::ports::{Notifier, Repository, SubmissionGateway};
pub use crate::utils::error::{Result, SiteError};
