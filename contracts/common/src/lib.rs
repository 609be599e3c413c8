//! Shared, host-agnostic helpers for the benefits contract suite.
//!
//! This crate provides:
//! - [`route_pattern`]: route-pattern parsing, path normalisation and the
//!   single-segment parameter match used by the access resolver.
//! - [`money`]: whole-unit percentage arithmetic used by the billing
//!   calculator.
//!
//! Nothing here depends on `soroban_sdk`; contracts copy their `String`
//! arguments into a stack buffer and call these functions on `&str`, and the
//! same rules can be reused from off-chain tooling.

#![cfg_attr(not(test), no_std)]

// ── Modules ──────────────────────────────────────────────────────────────────

pub mod money;
pub mod route_pattern;

pub use money::*;
pub use route_pattern::*;
