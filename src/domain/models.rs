use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Option code under which a cart item stores its selected link ids,
/// as a comma-separated string.
pub const DOWNLOADABLE_LINK_IDS_OPTION: &str = "downloadable_link_ids";

/// Store scope for configuration flag resolution.
pub type StoreId = u32;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    #[serde(default)]
    pub items: Vec<CartItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    /// Selected options, keyed by option code.
    #[serde(default)]
    pub options: BTreeMap<String, String>,
}

impl CartItem {
    pub fn option_value(&self, code: &str) -> Option<&str> {
        self.options.get(code).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    pub type_id: ProductType,
}

impl Product {
    pub fn is_downloadable(&self) -> bool {
        self.type_id == ProductType::Downloadable
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductType {
    Simple,
    Virtual,
    Downloadable,
    /// Catalog types this crate has no special handling for.
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub link_id: u64,
    pub is_shareable: Shareability,
}

/// Per-link shareability tri-state, serialized as its integer wire value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Shareability {
    No,
    Yes,
    UseDefault,
}

impl Shareability {
    /// Whether a link with this state permits sharing, given the
    /// store-level default for `UseDefault`.
    pub fn allows_sharing(self, default_shareable: bool) -> bool {
        match self {
            Shareability::No => false,
            Shareability::Yes => true,
            Shareability::UseDefault => default_shareable,
        }
    }
}

impl TryFrom<u8> for Shareability {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(Shareability::No),
            1 => Ok(Shareability::Yes),
            2 => Ok(Shareability::UseDefault),
            other => Err(format!("invalid shareability value: {}", other)),
        }
    }
}

impl From<Shareability> for u8 {
    fn from(s: Shareability) -> u8 {
        match s {
            Shareability::No => 0,
            Shareability::Yes => 1,
            Shareability::UseDefault => 2,
        }
    }
}

/// Outcome of one eligibility rule over one quote.
///
/// `Allowed` means "no objection from this rule"; only the caller's fold
/// across all applicable rules decides the final answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Allowed,
    Disallowed(DenyReason),
}

impl Verdict {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Verdict::Allowed)
    }

    pub fn to_report(&self, store_id: StoreId) -> EligibilityReport {
        match self {
            Verdict::Allowed => EligibilityReport {
                store_id,
                allowed: true,
                reason: None,
            },
            Verdict::Disallowed(reason) => EligibilityReport {
                store_id,
                allowed: false,
                reason: Some(reason.to_string()),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DenyReason {
    GuestCheckoutDisabled { sku: String },
    NonShareableLink { sku: String, link_id: u64 },
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenyReason::GuestCheckoutDisabled { sku } => {
                write!(f, "guest checkout disabled for downloadable product: {}", sku)
            }
            DenyReason::NonShareableLink { sku, link_id } => {
                write!(f, "link {} of product {} is not shareable", link_id, sku)
            }
        }
    }
}

#[derive(Serialize)]
pub struct EligibilityReport {
    pub store_id: StoreId,
    pub allowed: bool,
    pub reason: Option<String>,
}
