use crate::config::Config;

/// Print the effective configuration with the workspace key redacted.
pub fn check() {
    let config = Config::from_env();

    println!(
        "workspace_id:       {}",
        display_or_unset(&config.workspace_id)
    );
    println!(
        "workspace_key:      {}",
        if config.workspace_key.is_empty() {
            "(not set)".to_string()
        } else {
            format!("(set, {} chars)", config.workspace_key.len())
        }
    );
    println!("tenant_name:        {}", config.tenant_name);
    println!("ingestion_endpoint: {}", config.ingestion_url());

    if !config.has_credentials() {
        println!();
        println!("Deliveries will fail until WORKSPACE_ID and WORKSPACE_KEY are set.");
    }
}

fn display_or_unset(value: &str) -> &str {
    if value.is_empty() {
        "(not set)"
    } else {
        value
    }
}
