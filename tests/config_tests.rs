use std::collections::HashMap;
use std::path::PathBuf;

use adminportal::config::{PortalConfig, DEFAULT_LOG_FILTER, ENV_LOG, ENV_PLANS_FILE};
use adminportal::ui::actions;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

#[test]
fn test_defaults_without_environment() {
    let config = PortalConfig::from_lookup(lookup(&[]));
    assert_eq!(config, PortalConfig::default());
    assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    assert_eq!(config.plans_file, None);
}

#[test]
fn test_reads_plans_file_and_log_filter() {
    let config = PortalConfig::from_lookup(lookup(&[
        (ENV_PLANS_FILE, "/tmp/planos.json"),
        (ENV_LOG, "adminportal=debug"),
    ]));
    assert_eq!(config.plans_file, Some(PathBuf::from("/tmp/planos.json")));
    assert_eq!(config.log_filter, "adminportal=debug");
}

#[test]
fn test_blank_values_are_ignored() {
    let config = PortalConfig::from_lookup(lookup(&[(ENV_PLANS_FILE, "  "), (ENV_LOG, "")]));
    assert_eq!(config, PortalConfig::default());
}

#[test]
fn test_initial_plans_fall_back_to_bundled_data() {
    let initial = actions::load_initial_plans(&PortalConfig::default());
    assert_eq!(initial.rows.len(), 12);
    assert_eq!(initial.error, None);

    let dir = tempfile::tempdir().unwrap();
    let config = PortalConfig {
        plans_file: Some(dir.path().join("missing.json")),
        ..PortalConfig::default()
    };
    let initial = actions::load_initial_plans(&config);
    assert_eq!(initial.rows.len(), 12);
    assert!(initial.error.unwrap().starts_with("Falha ao carregar dados"));
}

#[test]
fn test_initial_plans_from_configured_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("planos.json");
    std::fs::write(&path, r#"[{"nome":"Acme","plano":"Premium","tipoFaturamento":"PIX"}]"#).unwrap();

    let config = PortalConfig {
        plans_file: Some(path),
        ..PortalConfig::default()
    };
    let initial = actions::load_initial_plans(&config);
    assert_eq!(initial.rows.len(), 1);
    assert_eq!(initial.error, None);
}
