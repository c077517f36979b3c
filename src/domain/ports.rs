use crate::domain::model::AvailabilityResult;
use crate::utils::error::Result;
use async_trait::async_trait;

/// The externally supplied capability that decides, for an address, whether
/// service is available and which plans apply. Engines depend only on this
/// trait; the built-in demo lookup and the HTTP adapter are both plugged in
/// at construction time.
#[async_trait]
pub trait AvailabilityLookup: Send + Sync {
    async fn check(&self, address: &str) -> Result<AvailabilityResult>;
}

pub trait ConfigProvider: Send + Sync {
    fn lookup_endpoint(&self) -> Option<&str>;
    fn catalog_file(&self) -> Option<&str>;
    fn demo_latency_ms(&self) -> u64;
    fn availability_rate(&self) -> f64;
}
