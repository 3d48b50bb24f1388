//! Application constants
//!
//! The browser has no process environment, so the values `lib-core` would
//! read from `SUPPORT_UNVERIFIED_ASSET` and friends are fixed here at build time.

use lib_core::UpdateFailurePolicy;

pub const API_BASE: &str = "http://127.0.0.1:3001";

// Feature flags / asset verification
pub const SUPPORT_UNVERIFIED_ASSET: bool = true;
pub const UPDATE_FAILURE_POLICY: UpdateFailurePolicy = UpdateFailurePolicy::Optimistic;
pub const SNACKBAR_CAPACITY: usize = 8;

// Default network (Ethereum mainnet)
pub const DEFAULT_CHAIN_ID: u64 = 1;

// UI constants
pub const INITIALIZATION_TIMEOUT_MS: u32 = 5000;
pub const SNACKBAR_DURATION_MS: u32 = 3000;
