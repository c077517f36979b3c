use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Duplicate plan id: {id}")]
    DuplicateIdError { id: String },

    #[error("Plan not found: {id}")]
    NotFoundError { id: String },

    #[error("Availability lookup failed: {message}")]
    LookupError { message: String },

    #[error("Lookup request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Catalog file error: {0}")]
    CatalogFileError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {field}: {reason}")]
    InvalidConfigValueError { field: String, reason: String },
}

impl SiteError {
    /// Duplicate ids are a validation failure of the catalog, so they answer
    /// true here along with malformed user input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SiteError::ValidationError { .. } | SiteError::DuplicateIdError { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SiteError::ValidationError { message } => message.clone(),
            SiteError::DuplicateIdError { id } => {
                format!("The plan catalog contains the id \"{}\" more than once.", id)
            }
            SiteError::NotFoundError { id } => {
                format!("No plan with id \"{}\" exists in the catalog.", id)
            }
            SiteError::LookupError { .. } | SiteError::HttpError(_) => {
                "An error occurred while checking availability. Please try again.".to_string()
            }
            SiteError::InvalidConfigValueError { field, reason } => {
                format!("Configuration value \"{}\" is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SiteError::ValidationError { .. } => "Correct the input and submit again",
            SiteError::DuplicateIdError { .. } => "Remove or rename the duplicated plan entry",
            SiteError::NotFoundError { .. } => "Select a plan listed in the comparison table",
            SiteError::LookupError { .. } | SiteError::HttpError(_) => {
                "Retry the availability check in a moment"
            }
            SiteError::CatalogFileError(_) => "Check the catalog TOML file syntax",
            SiteError::InvalidConfigValueError { .. } => "Fix the configuration value and rerun",
            _ => "Check the logs for details",
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
