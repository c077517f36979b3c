use clap::Parser;
use ruralnet_site::config::load_catalog;
use ruralnet_site::utils::{logger, validation::Validate};
use ruralnet_site::{
    AvailabilityCheckEngine, AvailabilityLookup, CheckState, CliConfig, ConfigProvider, DemoLookup,
    HttpLookup, PlanCatalogEngine,
};
use std::path::Path;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting ruralnet-site demo");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 建立方案目錄引擎
    let mut catalog = match config.catalog_file() {
        Some(path) => PlanCatalogEngine::new(load_catalog(Path::new(path))?)?,
        None => PlanCatalogEngine::with_default_catalog(),
    };
    if let Some(key) = config.sort_by {
        catalog.request_sort(key);
    }
    print_plan_table(&catalog);

    // 有地址才執行可用性查詢
    if let Some(address) = &config.address {
        let state = match config.lookup_endpoint() {
            Some(endpoint) => {
                tracing::info!("Using availability service at {}", endpoint);
                run_check(HttpLookup::new(endpoint.to_string()), address).await?
            }
            None => {
                tracing::info!("No lookup endpoint configured, using demo lookup");
                let lookup = DemoLookup::new(
                    Duration::from_millis(config.demo_latency_ms()),
                    config.availability_rate(),
                );
                run_check(lookup, address).await?
            }
        };
        print_check_result(&state);
    }

    Ok(())
}

async fn run_check<L: AvailabilityLookup>(
    lookup: L,
    address: &str,
) -> Result<CheckState, Box<dyn std::error::Error>> {
    let mut engine = AvailabilityCheckEngine::new(lookup);
    println!("🔎 Checking availability for: {}", address);

    match engine.check(address).await {
        Ok(state) => {
            if let Some(e) = engine.last_error() {
                tracing::warn!("Lookup failed behind generic message: {}", e);
            }
            Ok(state)
        }
        Err(e) => {
            tracing::error!("❌ Submission rejected: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            Err(e.into())
        }
    }
}

fn print_plan_table(catalog: &PlanCatalogEngine) {
    println!("Internet Service Plans");
    println!(
        "{:<18} {:>10} {:>10} {:>10} {:>10}  Features",
        "Plan", "Down", "Up", "Data Cap", "Price"
    );
    for plan in catalog.sorted_view() {
        let badge = if plan.recommended {
            " (Recommended)"
        } else {
            ""
        };
        println!(
            "{:<18} {:>6} Mbps {:>6} Mbps {:>10} {:>7.2}/mo  {}{}",
            plan.name,
            plan.download_speed,
            plan.upload_speed,
            plan.data_cap,
            plan.price,
            plan.features.join(", "),
            badge
        );
    }
    println!();
}

fn print_check_result(state: &CheckState) {
    let Some(result) = state.result() else {
        return;
    };

    if result.available {
        println!("✅ {}", result.message);
        println!("Available Plans:");
        for plan in &result.plans {
            println!(
                "  {} ({} Mbps) ${:.2}/mo",
                plan.name, plan.download_speed, plan.price
            );
        }
    } else {
        println!("⚠️  {}", result.message);
    }
}
