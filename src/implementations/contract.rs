use log::debug;
use serde::Serialize;
use thiserror::Error;

use crate::errors::RegistryError;
use crate::models::property::Property;
use crate::traits::contract::RegistryContract;

/// Errors raised at the invocation boundary, before or instead of the
/// registry running at all.
#[derive(Debug, Error)]
pub enum ContractError {
    #[error("unknown function {0:?}")]
    UnknownFunction(String),

    #[error("{function} expects {expected} arguments, got {got}")]
    BadArity {
        function: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("argument {name} {value:?} is not a valid {expected}")]
    InvalidArgument {
        name: &'static str,
        value: String,
        expected: &'static str,
    },

    /// The registry rejected the operation; its reason passes through
    /// unchanged.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Payload handed back to the invoking runtime. Serializes to the raw
/// record JSON, an array of records, or `null` for operations without a
/// return value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ContractResponse {
    Empty,
    One(Property),
    Many(Vec<Property>),
}

/// Thin dispatch layer between a hosting runtime and the registry.
///
/// Resolves the wire-level function name, marshals the string arguments
/// into typed parameters, and forwards to the [`RegistryContract`]
/// implementation. No registry semantics live here.
pub struct ContractRouter<C> {
    contract: C,
}

impl<C: RegistryContract> ContractRouter<C> {
    pub fn new(contract: C) -> Self {
        Self { contract }
    }

    /// Entry-point names accepted by [`invoke`](Self::invoke).
    pub fn functions() -> &'static [&'static str] {
        &[
            "AddProperty",
            "QueryAllProperties",
            "QueryPropertyByID",
            "TransferProperty",
        ]
    }

    /// Dispatch one invocation. `args` carries the positional string
    /// arguments exactly as the runtime received them.
    pub async fn invoke(
        &self,
        function: &str,
        args: &[String],
    ) -> Result<ContractResponse, ContractError> {
        debug!("Invoking {} with {} argument(s)", function, args.len());

        match function {
            "AddProperty" => {
                expect_arity("AddProperty", args, 5)?;
                let area = parse_int("area", &args[2])?;
                let value = parse_int("value", &args[4])?;
                self.contract
                    .create_property(&args[0], &args[1], area, &args[3], value)
                    .await?;
                Ok(ContractResponse::Empty)
            }
            "QueryAllProperties" => {
                expect_arity("QueryAllProperties", args, 0)?;
                let properties = self.contract.query_all_properties().await?;
                Ok(ContractResponse::Many(properties))
            }
            "QueryPropertyByID" => {
                expect_arity("QueryPropertyByID", args, 1)?;
                let property = self.contract.query_property_by_id(&args[0]).await?;
                Ok(ContractResponse::One(property))
            }
            "TransferProperty" => {
                expect_arity("TransferProperty", args, 2)?;
                self.contract.transfer_property(&args[0], &args[1]).await?;
                Ok(ContractResponse::Empty)
            }
            other => Err(ContractError::UnknownFunction(other.to_string())),
        }
    }
}

fn expect_arity(
    function: &'static str,
    args: &[String],
    expected: usize,
) -> Result<(), ContractError> {
    if args.len() != expected {
        return Err(ContractError::BadArity {
            function,
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

fn parse_int(name: &'static str, value: &str) -> Result<i64, ContractError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| ContractError::InvalidArgument {
            name,
            value: value.to_string(),
            expected: "integer",
        })
}
