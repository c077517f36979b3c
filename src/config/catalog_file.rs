use crate::domain::model::Plan;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// TOML plan-catalog source, the file-based way to inject a catalog:
///
/// ```toml
/// [catalog]
/// name = "Spring 2026 lineup"
///
/// [[plans]]
/// id = "basic"
/// name = "Rural Basic"
/// download_speed = 10
/// upload_speed = 2
/// data_cap = "150 GB"
/// price = 49.99
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub catalog: Option<CatalogInfo>,
    pub plans: Vec<Plan>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogInfo {
    pub name: String,
    pub description: Option<String>,
}

impl Validate for CatalogFile {
    fn validate(&self) -> Result<()> {
        if self.plans.is_empty() {
            return Err(SiteError::InvalidConfigValueError {
                field: "plans".to_string(),
                reason: "Catalog file must define at least one plan".to_string(),
            });
        }
        for plan in &self.plans {
            validate_non_empty_string("plans.id", &plan.id)?;
            validate_non_empty_string("plans.name", &plan.name)?;
            validate_non_empty_string("plans.data_cap", &plan.data_cap)?;
            if plan.price < 0.0 {
                return Err(SiteError::InvalidConfigValueError {
                    field: "plans.price".to_string(),
                    reason: format!("Price cannot be negative: {}", plan.price),
                });
            }
        }
        Ok(())
    }
}

/// Reads and validates a catalog file. Duplicate ids are left to
/// `PlanCatalogEngine::new`, which owns that invariant.
pub fn load_catalog(path: &Path) -> Result<Vec<Plan>> {
    tracing::debug!("Loading plan catalog from: {}", path.display());
    let raw = std::fs::read_to_string(path)?;
    let file: CatalogFile = toml::from_str(&raw)?;
    file.validate()?;
    tracing::debug!("Loaded {} plans", file.plans.len());
    Ok(file.plans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_toml(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_minimal_catalog() {
        let file = write_toml(
            r#"
            [catalog]
            name = "Test lineup"

            [[plans]]
            id = "basic"
            name = "Rural Basic"
            download_speed = 10
            upload_speed = 2
            data_cap = "150 GB"
            price = 49.99

            [[plans]]
            id = "unlimited"
            name = "Rural Unlimited"
            download_speed = 25
            upload_speed = 5
            data_cap = "Unlimited"
            price = 99.99
            features = ["No Data Limits"]
            recommended = true
            "#,
        );

        let plans = load_catalog(file.path()).unwrap();
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].id, "basic");
        assert_eq!(plans[0].price, 49.99);
        assert!(plans[0].features.is_empty());
        assert_eq!(plans[1].features, vec!["No Data Limits"]);
        assert!(plans[1].recommended);
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let file = write_toml("plans = []\n");
        assert!(load_catalog(file.path()).is_err());
    }

    #[test]
    fn test_negative_price_rejected() {
        let file = write_toml(
            r#"
            [[plans]]
            id = "basic"
            name = "Rural Basic"
            download_speed = 10
            upload_speed = 2
            data_cap = "150 GB"
            price = -1.0
            "#,
        );
        let result = load_catalog(file.path());
        assert!(matches!(
            result,
            Err(SiteError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_malformed_toml_is_catalog_file_error() {
        let file = write_toml("[[plans]\nid = broken");
        assert!(matches!(
            load_catalog(file.path()),
            Err(SiteError::CatalogFileError(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_catalog(Path::new("/nonexistent/catalog.toml"));
        assert!(matches!(result, Err(SiteError::IoError(_))));
    }
}
