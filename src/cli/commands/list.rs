use anyhow::Result;

use crate::cli::ui;
use crate::traits::contract::RegistryContract;

/// Listing command
pub async fn execute<C: RegistryContract>(registry: &C) -> Result<()> {
    let properties = registry.query_all_properties().await?;

    if properties.is_empty() {
        ui::print_info("No properties registered");
        return Ok(());
    }

    ui::display_properties(&properties);
    ui::print_info(format!("{} properties on the ledger", properties.len()).as_str());

    Ok(())
}
