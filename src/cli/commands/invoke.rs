use anyhow::Result;

use crate::cli::ui;
use crate::implementations::contract::{ContractError, ContractRouter};
use crate::traits::contract::RegistryContract;

/// Raw entry-point invocation command. Arguments stay strings end to end,
/// the way a hosting runtime would deliver them.
pub async fn execute<C: RegistryContract>(
    router: &ContractRouter<C>,
    function: &str,
    args: &[String],
) -> Result<()> {
    match router.invoke(function, args).await {
        Ok(response) => {
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        Err(e @ ContractError::UnknownFunction(_)) => {
            ui::print_info(
                format!(
                    "Known functions: {}",
                    ContractRouter::<C>::functions().join(", ")
                )
                .as_str(),
            );
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}
