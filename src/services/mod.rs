//! Service layer containing the eligibility rules and collaborator seams.
//!
//! ## Service map
//! - `eligibility.rs` — guest checkout rule, rule combinator, error type.
//! - `config.rs` — flag schema, config seam, TOML-backed settings file.
//! - `links.rs` — link catalog seam + in-memory implementation.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Collaborator traits return `anyhow::Result`; the rule wraps failures
//!   into `EligibilityError` so callers see which seam failed.

pub mod config;
pub mod eligibility;
pub mod links;
