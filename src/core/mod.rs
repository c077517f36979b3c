pub mod availability;
pub mod catalog;

pub use crate::domain::model::{
    AvailabilityResult, CheckState, Plan, SortDirection, SortDirective, SortKey,
};
pub use crate::domain::ports::{AvailabilityLookup, ConfigProvider};
pub use crate::utils::error::Result;
