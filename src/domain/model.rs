use serde::{Deserialize, Serialize};

/// A purchasable internet-service tier. Immutable once constructed;
/// `features` and `best_for` keep their authoring order (display-significant).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    pub name: String,
    pub download_speed: u32,
    pub upload_speed: u32,
    pub data_cap: String,
    pub price: f64,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub recommended: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub best_for: Vec<String>,
}

/// Sortable columns of the comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Name,
    DownloadSpeed,
    UploadSpeed,
    DataCap,
    Price,
}

impl std::str::FromStr for SortKey {
    type Err = crate::utils::error::SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortKey::Name),
            "download-speed" | "download_speed" => Ok(SortKey::DownloadSpeed),
            "upload-speed" | "upload_speed" => Ok(SortKey::UploadSpeed),
            "data-cap" | "data_cap" => Ok(SortKey::DataCap),
            "price" => Ok(SortKey::Price),
            other => Err(crate::utils::error::SiteError::InvalidConfigValueError {
                field: "sort_by".to_string(),
                reason: format!("Unknown sort key: {}", other),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Active sort key + direction. No directive means catalog insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortDirective {
    pub key: SortKey,
    pub direction: SortDirection,
}

/// Outcome of one availability check. `plans` is empty when unavailable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityResult {
    pub available: bool,
    #[serde(default)]
    pub plans: Vec<Plan>,
    #[serde(default)]
    pub message: String,
}

/// State machine of the availability check workflow.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CheckState {
    #[default]
    Idle,
    Checking,
    Resolved(AvailabilityResult),
}

impl CheckState {
    pub fn is_idle(&self) -> bool {
        matches!(self, CheckState::Idle)
    }

    pub fn is_checking(&self) -> bool {
        matches!(self, CheckState::Checking)
    }

    pub fn result(&self) -> Option<&AvailabilityResult> {
        match self {
            CheckState::Resolved(result) => Some(result),
            _ => None,
        }
    }
}

/// The four reference plans from the marketing site, used when no catalog is
/// injected.
pub fn default_catalog() -> Vec<Plan> {
    vec![
        Plan {
            id: "basic".to_string(),
            name: "Rural Basic".to_string(),
            download_speed: 10,
            upload_speed: 2,
            data_cap: "150 GB".to_string(),
            price: 49.99,
            features: vec![
                "Standard Installation".to_string(),
                "Basic Technical Support".to_string(),
                "Email Service".to_string(),
            ],
            recommended: false,
            description: "A reliable internet connection for basic browsing and email."
                .to_string(),
            best_for: vec![
                "Email and web browsing".to_string(),
                "Social media".to_string(),
                "Small households".to_string(),
            ],
        },
        Plan {
            id: "standard".to_string(),
            name: "Rural Plus".to_string(),
            download_speed: 25,
            upload_speed: 5,
            data_cap: "300 GB".to_string(),
            price: 69.99,
            features: vec![
                "Standard Installation".to_string(),
                "24/7 Technical Support".to_string(),
                "Email Service".to_string(),
                "WiFi Router Included".to_string(),
            ],
            recommended: true,
            description:
                "Our most popular plan with enough speed for streaming and multiple devices."
                    .to_string(),
            best_for: vec![
                "HD video streaming".to_string(),
                "Online gaming".to_string(),
                "Multiple devices".to_string(),
                "Remote work".to_string(),
            ],
        },
        Plan {
            id: "premium".to_string(),
            name: "Rural Pro".to_string(),
            download_speed: 50,
            upload_speed: 10,
            data_cap: "500 GB".to_string(),
            price: 89.99,
            features: vec![
                "Priority Installation".to_string(),
                "24/7 Premium Support".to_string(),
                "Static IP Address".to_string(),
                "WiFi Router Included".to_string(),
                "Security Suite".to_string(),
            ],
            recommended: false,
            description:
                "Our fastest rural internet plan for households with high bandwidth needs."
                    .to_string(),
            best_for: vec![
                "4K video streaming".to_string(),
                "Large file downloads".to_string(),
                "Multiple users".to_string(),
                "Home office".to_string(),
                "Smart home devices".to_string(),
            ],
        },
        Plan {
            id: "unlimited".to_string(),
            name: "Rural Unlimited".to_string(),
            download_speed: 25,
            upload_speed: 5,
            data_cap: "Unlimited".to_string(),
            price: 99.99,
            features: vec![
                "Standard Installation".to_string(),
                "24/7 Technical Support".to_string(),
                "WiFi Router Included".to_string(),
                "No Data Limits".to_string(),
            ],
            recommended: false,
            description:
                "Unlimited data with our reliable Rural Plus speeds for heavy internet users."
                    .to_string(),
            best_for: vec![
                "Video streaming".to_string(),
                "Large families".to_string(),
                "Work from home".to_string(),
                "Frequent downloads".to_string(),
            ],
        },
    ]
}
