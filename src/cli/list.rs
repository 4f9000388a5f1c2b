use crate::config::{AlertsConfig, StoreKind};
use crate::error::Result;
use crate::provider::file::FileAlertStore;
use crate::provider::AlertStore;
use crate::types::Alert;

/// Execute the `list` command: display alerts from the configured data file.
///
/// `active_only` prints every active alert and ignores `limit`/`offset`;
/// the CLI rejects that combination before reaching here.
pub async fn execute(
    config: &AlertsConfig,
    limit: u64,
    offset: u64,
    active_only: bool,
) -> Result<()> {
    if let Some(note) = store_note(config) {
        eprintln!("{}", note);
    }
    let store = FileAlertStore::open(&config.data_file).await?;

    let (alerts, total) = if active_only {
        let active = store.active_alerts().await?;
        let total = active.len() as u64;
        (active, total)
    } else {
        let page = store.list(limit, offset).await?;
        (page.alerts, page.total)
    };

    if alerts.is_empty() {
        println!("No alerts found in {}.", config.data_file.display());
        return Ok(());
    }

    println!(
        "{:<44} {:<24} {:<8} {:<7} {:<8} {:<10} UPDATED",
        "ID", "NAME", "TYPE", "ACTIVE", "DISMISS", "REGISTERED"
    );
    for alert in &alerts {
        print_row(alert);
    }

    println!("\n{} of {} alert(s) shown", alerts.len(), total);
    Ok(())
}

fn print_row(alert: &Alert) {
    let name: String = alert.name.chars().take(24).collect();
    println!(
        "{:<44} {:<24} {:<8} {:<7} {:<8} {:<10} {}",
        alert.id,
        name,
        alert.alert_type.as_str(),
        alert.active,
        alert.allow_dismiss,
        alert.registered_only,
        alert.updated_date.format("%Y-%m-%d %H:%M"),
    );
}

/// The CLI always reads the data file. A server running the memory store
/// keeps its alerts in process, so say so instead of implying none exist.
fn store_note(config: &AlertsConfig) -> Option<String> {
    match config.store {
        StoreKind::File => None,
        StoreKind::Memory => Some(format!(
            "note: configured store is memory; showing {} instead of the running server's alerts",
            config.data_file.display()
        )),
    }
}
