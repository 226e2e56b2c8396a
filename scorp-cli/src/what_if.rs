use rust_decimal::Decimal;
use scorp_core::{ClientRecord, ClientStatus, FinancialSnapshot, ScenarioOverlay};
use tracing::warn;

pub const WHAT_IF_NAME: &str = "What-if";

/// Builds the ad hoc scenario described by `--add-client` and
/// `--remove-client`. Returns `None` when neither flag was given.
///
/// Added clients are virtual, active, and numbered `cli-1`, `cli-2`, ... in
/// the order given. The scenario keeps the snapshot's deductions, so only the
/// client changes show up in the comparison.
pub fn build_what_if(
    snapshot: &FinancialSnapshot,
    add_clients: &[Decimal],
    remove_clients: &[String],
) -> Option<ScenarioOverlay> {
    if add_clients.is_empty() && remove_clients.is_empty() {
        return None;
    }

    let mut overlay = ScenarioOverlay::named(WHAT_IF_NAME);

    for (n, retainer) in add_clients.iter().enumerate() {
        let id = format!("cli-{}", n + 1);
        overlay.clients.add(ClientRecord {
            name: format!("New client {}", n + 1),
            id,
            monthly_retainer: *retainer,
            status: ClientStatus::Active,
        });
    }

    for id in remove_clients {
        if !snapshot.clients.iter().any(|client| &client.id == id) {
            warn!(id = %id, "--remove-client names no client in the data file");
        }
        overlay.clients.remove(id.as_str());
    }

    Some(overlay)
}
