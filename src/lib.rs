pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{DemoLookup, HttpLookup};
pub use core::availability::AvailabilityCheckEngine;
pub use core::catalog::PlanCatalogEngine;
pub use domain::model::{
    default_catalog, AvailabilityResult, CheckState, Plan, SortDirection, SortDirective, SortKey,
};
pub use domain::ports::{AvailabilityLookup, ConfigProvider};
pub use utils::error::{Result, SiteError};
