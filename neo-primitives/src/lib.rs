//! # Neo Primitives
//!
//! Fundamental types shared by the contract invoker crates:
//! - `UInt160`: 160-bit script hashes (contracts, accounts)
//! - `UInt256`: 256-bit hashes (transactions, assets)
//! - `ContractParameterType`: the closed set of ABI parameter kinds
//!
//! ## Example
//!
//! ```rust
//! use neo_primitives::{UInt160, UInt256};
//!
//! let hash = UInt256::zero();
//! assert!(hash.is_zero());
//!
//! let script_hash = UInt160::parse("0x0000000000000000000000000000000000000001").unwrap();
//! assert!(!script_hash.is_zero());
//! ```

pub mod constants;
pub mod contract_parameter_type;
pub mod error;
pub mod uint160;
pub mod uint256;


pub use constants::*;
pub use contract_parameter_type::ContractParameterType;
pub use error::{PrimitiveError, PrimitiveResult};
pub use uint160::{UInt160, UINT160_SIZE};
pub use uint256::{UInt256, UINT256_SIZE};
