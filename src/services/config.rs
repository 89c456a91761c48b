use crate::domain::models::StoreId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// The two store-scoped flags the eligibility rule reads.
///
/// An enum instead of raw config-path strings so callers cannot ask for a
/// key the rule does not know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutFlag {
    /// Disallow guest checkout whenever the quote has a downloadable item.
    DisableGuestCheckout,
    /// Default shareability for links whose own state is "use default".
    LinksShareableByDefault,
}

impl fmt::Display for CheckoutFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CheckoutFlag::DisableGuestCheckout => "disable_guest_checkout",
            CheckoutFlag::LinksShareableByDefault => "links_shareable_by_default",
        })
    }
}

/// Resolves boolean flags scoped to a store.
pub trait ConfigSource {
    fn is_set_flag(&self, flag: CheckoutFlag, store_id: StoreId) -> anyhow::Result<bool>;
}

impl<T: ConfigSource + ?Sized> ConfigSource for &T {
    fn is_set_flag(&self, flag: CheckoutFlag, store_id: StoreId) -> anyhow::Result<bool> {
        (**self).is_set_flag(flag, store_id)
    }
}

/// TOML-backed settings: a `[defaults]` table plus optional `[[stores]]`
/// overrides keyed by store id.
///
/// ```toml
/// [defaults]
/// disable_guest_checkout = false
/// links_shareable_by_default = true
///
/// [[stores]]
/// id = 3
/// disable_guest_checkout = true
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SettingsFile {
    #[serde(default)]
    pub defaults: FlagSettings,
    #[serde(default)]
    pub stores: Vec<StoreOverride>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FlagSettings {
    #[serde(default)]
    pub disable_guest_checkout: bool,
    #[serde(default)]
    pub links_shareable_by_default: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreOverride {
    pub id: StoreId,
    #[serde(default)]
    pub disable_guest_checkout: Option<bool>,
    #[serde(default)]
    pub links_shareable_by_default: Option<bool>,
}

impl SettingsFile {
    pub fn from_toml_str(raw: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Missing file resolves to defaults, matching how embedders treat an
    /// unconfigured store.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    pub fn flag(&self, flag: CheckoutFlag, store_id: StoreId) -> bool {
        let store = self.stores.iter().find(|s| s.id == store_id);
        match flag {
            CheckoutFlag::DisableGuestCheckout => store
                .and_then(|s| s.disable_guest_checkout)
                .unwrap_or(self.defaults.disable_guest_checkout),
            CheckoutFlag::LinksShareableByDefault => store
                .and_then(|s| s.links_shareable_by_default)
                .unwrap_or(self.defaults.links_shareable_by_default),
        }
    }
}

impl ConfigSource for SettingsFile {
    fn is_set_flag(&self, flag: CheckoutFlag, store_id: StoreId) -> anyhow::Result<bool> {
        Ok(self.flag(flag, store_id))
    }
}
