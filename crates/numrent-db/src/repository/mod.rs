//! Repository layer — query functions organized by table.

pub mod billing;
pub mod buyers;
pub mod numbers;
pub mod sellers;
