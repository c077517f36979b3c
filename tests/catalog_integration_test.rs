use ruralnet_site::config::load_catalog;
use ruralnet_site::{PlanCatalogEngine, SiteError, SortKey};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_toml(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_catalog_file_to_sorted_table() {
    let file = write_toml(
        r#"
        [catalog]
        name = "Test lineup"

        [[plans]]
        id = "premium"
        name = "Rural Pro"
        download_speed = 50
        upload_speed = 10
        data_cap = "500 GB"
        price = 89.99

        [[plans]]
        id = "basic"
        name = "Rural Basic"
        download_speed = 10
        upload_speed = 2
        data_cap = "150 GB"
        price = 49.99

        [[plans]]
        id = "standard"
        name = "Rural Plus"
        download_speed = 25
        upload_speed = 5
        data_cap = "300 GB"
        price = 69.99
        recommended = true
        "#,
    );

    let plans = load_catalog(file.path()).unwrap();
    let mut engine = PlanCatalogEngine::new(plans).unwrap();

    // Without a directive the table shows file order.
    let ids: Vec<&str> = engine.sorted_view().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["premium", "basic", "standard"]);

    engine.request_sort(SortKey::Price);
    let ids: Vec<&str> = engine.sorted_view().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["basic", "standard", "premium"]);

    engine.select_plan("standard").unwrap();
    assert!(engine.selected_plan().unwrap().recommended);
}

#[test]
fn test_catalog_file_with_duplicate_ids_refuses_engine() {
    let file = write_toml(
        r#"
        [[plans]]
        id = "basic"
        name = "Rural Basic"
        download_speed = 10
        upload_speed = 2
        data_cap = "150 GB"
        price = 49.99

        [[plans]]
        id = "basic"
        name = "Rural Basic v2"
        download_speed = 25
        upload_speed = 5
        data_cap = "300 GB"
        price = 69.99
        "#,
    );

    // The file itself parses; the engine owns the unique-id invariant and
    // refuses to start.
    let plans = load_catalog(file.path()).unwrap();
    let result = PlanCatalogEngine::new(plans);
    assert!(matches!(result, Err(SiteError::DuplicateIdError { .. })));
}
