//! Protocol constants shared by the primitive types.

/// Size of a script hash / account identifier in bytes.
pub const ADDRESS_SIZE: usize = 20;

/// Size of a transaction or block hash in bytes.
pub const HASH_SIZE: usize = 32;

/// Default Neo N3 address version byte (addresses start with `N`).
pub const ADDRESS_VERSION: u8 = 0x35;
