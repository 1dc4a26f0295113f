use neo_contract::ContractParameter;
use neo_primitives::ContractParameterType;
use serde_json::Value;
use tracing::debug;

use super::error::BindError;
use super::resolver::resolve;

/// Binds caller values to a contract schema, one parameter per schema position.
///
/// Positions without a caller value are resolved from an absent input.
/// Surplus caller values are ignored.
pub fn bind_parameters(
    schema: &[ContractParameterType],
    args: &[Value],
) -> Result<Vec<ContractParameter>, BindError> {
    if args.len() > schema.len() {
        debug!(
            expected = schema.len(),
            supplied = args.len(),
            "ignoring surplus invocation arguments"
        );
    }

    schema
        .iter()
        .enumerate()
        .map(|(index, &param_type)| {
            resolve(param_type, args.get(index)).map_err(|source| {
                BindError::ParameterBindingFailed {
                    index,
                    param_type,
                    source,
                }
            })
        })
        .collect()
}
