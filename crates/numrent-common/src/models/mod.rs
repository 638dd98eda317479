//! Domain models shared across the numrent crates.

pub mod billing;
pub mod buyer;
pub mod number;
pub mod seller;
