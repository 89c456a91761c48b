//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep quote/product/link/verdict types in one place.
//! - Avoid cyclic imports and duplicated type definitions.
//! - Make serialized report schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — quote, product, link, verdict and report structs.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.

pub mod models;
