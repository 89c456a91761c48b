use crate::domain::models::{
    CartItem, DenyReason, Quote, StoreId, Verdict, DOWNLOADABLE_LINK_IDS_OPTION,
};
use crate::services::config::{CheckoutFlag, ConfigSource};
use crate::services::links::LinkSource;
use tracing::debug;

#[derive(thiserror::Error, Debug)]
pub enum EligibilityError {
    #[error("config flag {flag} unavailable for store {store_id}")]
    Config {
        flag: CheckoutFlag,
        store_id: StoreId,
        #[source]
        source: anyhow::Error,
    },
    #[error("downloadable link lookup failed")]
    Links(#[source] anyhow::Error),
}

/// One eligibility rule over one quote. First `Disallowed` wins in
/// [`evaluate_rules`]; the result is monotonic, so stopping early is sound.
pub trait CheckoutRule {
    fn evaluate(&self, quote: &Quote, store_id: StoreId) -> Result<Verdict, EligibilityError>;
}

/// Folds a set of rules over one quote, returning the first objection.
pub fn evaluate_rules(
    rules: &[&dyn CheckoutRule],
    quote: &Quote,
    store_id: StoreId,
) -> Result<Verdict, EligibilityError> {
    for rule in rules {
        match rule.evaluate(quote, store_id)? {
            Verdict::Allowed => continue,
            disallowed => return Ok(disallowed),
        }
    }
    Ok(Verdict::Allowed)
}

/// Disallows guest checkout for quotes with downloadable items, either
/// store-wide or when a selected link is not shareable.
pub struct GuestCheckoutRule<C, L> {
    config: C,
    links: L,
}

impl<C: ConfigSource, L: LinkSource> GuestCheckoutRule<C, L> {
    pub fn new(config: C, links: L) -> Self {
        Self { config, links }
    }

    /// Scans the quote in order and stops at the first disallowing item.
    /// When the store-wide flag fires, no link lookup happens at all.
    pub fn evaluate(&self, quote: &Quote, store_id: StoreId) -> Result<Verdict, EligibilityError> {
        let guest_checkout_disabled = self.flag(CheckoutFlag::DisableGuestCheckout, store_id)?;
        let shareable_by_default = self.flag(CheckoutFlag::LinksShareableByDefault, store_id)?;

        for item in &quote.items {
            if !item.product.is_downloadable() {
                continue;
            }
            if guest_checkout_disabled {
                debug!(
                    store_id,
                    sku = %item.product.sku,
                    "guest checkout disabled for downloadable products"
                );
                return Ok(Verdict::Disallowed(DenyReason::GuestCheckoutDisabled {
                    sku: item.product.sku.clone(),
                }));
            }
            if let Some(link_id) = self.first_non_shareable_link(item, shareable_by_default)? {
                debug!(
                    store_id,
                    sku = %item.product.sku,
                    link_id,
                    "non-shareable link disallows guest checkout"
                );
                return Ok(Verdict::Disallowed(DenyReason::NonShareableLink {
                    sku: item.product.sku.clone(),
                    link_id,
                }));
            }
        }
        Ok(Verdict::Allowed)
    }

    /// Whether every link selected on the item may be shared.
    pub fn is_shareable(
        &self,
        item: &CartItem,
        default_shareable: bool,
    ) -> Result<bool, EligibilityError> {
        Ok(self
            .first_non_shareable_link(item, default_shareable)?
            .is_none())
    }

    fn first_non_shareable_link(
        &self,
        item: &CartItem,
        default_shareable: bool,
    ) -> Result<Option<u64>, EligibilityError> {
        let Some(raw) = item.option_value(DOWNLOADABLE_LINK_IDS_OPTION) else {
            return Ok(None);
        };
        let ids: Vec<String> = raw
            .split(',')
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        if ids.is_empty() {
            return Ok(None);
        }

        // Tokens go to the lookup as-is; ids that match nothing contribute
        // no link to check. That permissive fallback is load-bearing for
        // existing catalogs, see tests.
        let links = self
            .links
            .links_by_ids(&ids)
            .map_err(EligibilityError::Links)?;
        for link in links {
            if !link.is_shareable.allows_sharing(default_shareable) {
                return Ok(Some(link.link_id));
            }
        }
        Ok(None)
    }

    fn flag(&self, flag: CheckoutFlag, store_id: StoreId) -> Result<bool, EligibilityError> {
        self.config
            .is_set_flag(flag, store_id)
            .map_err(|source| EligibilityError::Config {
                flag,
                store_id,
                source,
            })
    }
}

impl<C: ConfigSource, L: LinkSource> CheckoutRule for GuestCheckoutRule<C, L> {
    fn evaluate(&self, quote: &Quote, store_id: StoreId) -> Result<Verdict, EligibilityError> {
        GuestCheckoutRule::evaluate(self, quote, store_id)
    }
}
