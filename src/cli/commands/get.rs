use anyhow::Result;

use crate::cli::ui;
use crate::traits::contract::RegistryContract;

/// Single-property lookup command
pub async fn execute<C: RegistryContract>(registry: &C, id: &str) -> Result<()> {
    let property = registry.query_property_by_id(id).await?;
    ui::display_property(&property);

    Ok(())
}
