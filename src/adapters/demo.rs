use crate::domain::model::{AvailabilityResult, Plan};
use crate::domain::ports::AvailabilityLookup;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

const AVAILABLE_MESSAGE: &str = "Great news! Service is available at your location.";
const UNAVAILABLE_MESSAGE: &str = "Unfortunately, service is not yet available at this location. \
     Join our waitlist to be notified when coverage expands to your area.";

/// Built-in mock for demos and tests: waits out a simulated network delay,
/// then reports availability with the configured probability. Production
/// callers inject a real capability instead; the engines never know the
/// difference.
pub struct DemoLookup {
    latency: Duration,
    availability_rate: f64,
    plans: Vec<Plan>,
}

impl DemoLookup {
    pub fn new(latency: Duration, availability_rate: f64) -> Self {
        Self {
            latency,
            availability_rate,
            plans: demo_plans(),
        }
    }

    pub fn with_plans(latency: Duration, availability_rate: f64, plans: Vec<Plan>) -> Self {
        Self {
            latency,
            availability_rate,
            plans,
        }
    }
}

impl Default for DemoLookup {
    /// 1.5s 延遲、七成可用率，跟網站 demo 一致
    fn default() -> Self {
        Self::new(Duration::from_millis(1500), 0.7)
    }
}

#[async_trait]
impl AvailabilityLookup for DemoLookup {
    async fn check(&self, address: &str) -> Result<AvailabilityResult> {
        tracing::debug!("Demo lookup for address: {}", address);
        tokio::time::sleep(self.latency).await;

        let available = rand::random::<f64>() < self.availability_rate;
        Ok(AvailabilityResult {
            available,
            plans: if available { self.plans.clone() } else { vec![] },
            message: if available {
                AVAILABLE_MESSAGE.to_string()
            } else {
                UNAVAILABLE_MESSAGE.to_string()
            },
        })
    }
}

/// The fixed three-item list the demo lookup returns on success.
fn demo_plans() -> Vec<Plan> {
    vec![
        Plan {
            id: "1".to_string(),
            name: "Rural Basic".to_string(),
            download_speed: 25,
            upload_speed: 5,
            data_cap: "150 GB".to_string(),
            price: 49.99,
            features: vec![],
            recommended: false,
            description: String::new(),
            best_for: vec![],
        },
        Plan {
            id: "2".to_string(),
            name: "Rural Plus".to_string(),
            download_speed: 50,
            upload_speed: 10,
            data_cap: "300 GB".to_string(),
            price: 69.99,
            features: vec![],
            recommended: false,
            description: String::new(),
            best_for: vec![],
        },
        Plan {
            id: "3".to_string(),
            name: "Rural Pro".to_string(),
            download_speed: 100,
            upload_speed: 20,
            data_cap: "500 GB".to_string(),
            price: 89.99,
            features: vec![],
            recommended: false,
            description: String::new(),
            best_for: vec![],
        },
    ]
}
