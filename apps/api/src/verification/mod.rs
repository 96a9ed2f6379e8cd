//! Claim verification against public evidence, plus the deterministic
//! mock registry used for background checks.

pub mod claims;
pub mod government;
pub mod handlers;
