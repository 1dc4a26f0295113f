//! # Neo Contract
//!
//! Typed contract parameters: the values bound to a contract entry point
//! before an invocation is signed and broadcast.
//!
//! ## Core Types
//!
//! - [`ContractParameter`]: a typed argument whose value always matches its type
//! - [`ContractParameterValue`]: the per-type value representation
//! - [`IntegerValue`]: `i64` or arbitrary-precision integer
//!
//! ## Example
//!
//! ```rust
//! use neo_contract::{ContractParameter, ContractParameterValue, IntegerValue};
//! use neo_primitives::ContractParameterType;
//!
//! let param = ContractParameter::new(ContractParameterValue::Integer(IntegerValue::Fixed(7)));
//! assert_eq!(param.param_type(), ContractParameterType::Integer);
//! assert_eq!(param.to_json()["value"], "7");
//! ```

pub mod contract_parameter;
pub mod integer;

pub use contract_parameter::{ContractParameter, ContractParameterValue};
pub use integer::IntegerValue;
