use crate::domain::model::SortKey;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "ruralnet-site")]
#[command(about = "Plan comparison and availability check engines for the RuralNet site")]
pub struct CliConfig {
    /// Address to run an availability check for
    #[arg(long)]
    pub address: Option<String>,

    /// Real availability service endpoint; the built-in demo lookup is used
    /// when absent
    #[arg(long)]
    pub lookup_endpoint: Option<String>,

    /// TOML file with [[plans]] tables; the four reference plans are used
    /// when absent
    #[arg(long)]
    pub catalog_file: Option<String>,

    /// Column to sort the comparison table by
    #[arg(long)]
    pub sort_by: Option<SortKey>,

    #[arg(long, default_value = "1500")]
    pub demo_latency_ms: u64,

    #[arg(long, default_value = "0.7")]
    pub availability_rate: f64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn lookup_endpoint(&self) -> Option<&str> {
        self.lookup_endpoint.as_deref()
    }

    fn catalog_file(&self) -> Option<&str> {
        self.catalog_file.as_deref()
    }

    fn demo_latency_ms(&self) -> u64 {
        self.demo_latency_ms
    }

    fn availability_rate(&self) -> f64 {
        self.availability_rate
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(endpoint) = &self.lookup_endpoint {
            validate_url("lookup_endpoint", endpoint)?;
        }
        if let Some(path) = &self.catalog_file {
            validate_non_empty_string("catalog_file", path)?;
        }
        validate_range("availability_rate", self.availability_rate, 0.0, 1.0)?;
        Ok(())
    }
}
