use anyhow::Result;

use crate::cli::ui;
use crate::traits::contract::RegistryContract;

/// Ownership transfer command
pub async fn execute<C: RegistryContract>(registry: &C, id: &str, new_owner: &str) -> Result<()> {
    let property = registry.transfer_property(id, new_owner).await?;

    ui::print_success(
        format!(
            "Property {} transferred to {}",
            property.id, property.owner_name
        )
        .as_str(),
    );
    ui::display_property(&property);

    Ok(())
}
