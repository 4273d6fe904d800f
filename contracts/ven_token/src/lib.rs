#![no_std]

pub mod storage;
pub mod types;
pub mod validation;
pub mod events;
pub mod token;
pub mod admin;

// ============================================================================
// CONTRATO PRINCIPAL
// ============================================================================

pub use token::{VenToken, VenTokenClient, READ_ONLY_FUNCTIONS};
pub use types::*;
