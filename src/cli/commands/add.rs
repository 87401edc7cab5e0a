use anyhow::Result;

use crate::cli::ui;
use crate::traits::contract::RegistryContract;

/// Property registration command
pub async fn execute<C: RegistryContract>(
    registry: &C,
    id: &str,
    name: &str,
    area: i64,
    owner: &str,
    value: i64,
) -> Result<()> {
    let property = registry
        .create_property(id, name, area, owner, value)
        .await?;

    ui::print_success(format!("Property {} registered", property.id).as_str());
    ui::display_property(&property);

    Ok(())
}
