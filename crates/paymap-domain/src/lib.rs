//! POS terminal domain types shared between the paymap crates
//!
//! This crate provides the canonical domain models for the terminal map:
//! - PosMachine: a recorded point-of-sale terminal at a merchant location
//! - BasicInfo: terminal capability metadata (networks, verification modes)
//! - Coordinates: a validated latitude/longitude pair
//! - CardNetwork, VerificationMode, MachineStatus: capability enums
//! - Validation: record-level checks before persistence

pub mod capability;
pub mod coordinates;
pub mod machine;
pub mod validation;

pub use capability::*;
pub use coordinates::*;
pub use machine::*;
pub use validation::*;
