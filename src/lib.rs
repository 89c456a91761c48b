//! Guest checkout eligibility for quotes that contain downloadable products.
//!
//! A quote is scanned in order. The first downloadable item that objects —
//! because the store disables guest checkout for downloadable products, or
//! because one of its selected links is not shareable — produces a
//! [`Verdict::Disallowed`] carrying the reason. The rule never affirms guest
//! checkout on its own: [`Verdict::Allowed`] means "no objection from this
//! rule", and the caller folds verdicts across all applicable rules with
//! [`evaluate_rules`].
//!
//! Collaborators are injected through two seams: [`ConfigSource`] resolves
//! the two store-scoped flags named by [`CheckoutFlag`], and [`LinkSource`]
//! looks up link records by raw id token. The crate ships a TOML-backed
//! [`SettingsFile`] and an [`InMemoryLinks`] catalog for embedders and tests.

pub mod domain;
pub mod services;

pub use domain::models::{
    CartItem, DenyReason, EligibilityReport, Link, Product, ProductType, Quote, Shareability,
    StoreId, Verdict, DOWNLOADABLE_LINK_IDS_OPTION,
};
pub use services::config::{CheckoutFlag, ConfigSource, FlagSettings, SettingsFile, StoreOverride};
pub use services::eligibility::{evaluate_rules, CheckoutRule, EligibilityError, GuestCheckoutRule};
pub use services::links::{InMemoryLinks, LinkSource};
