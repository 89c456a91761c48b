use downgate::{
    CartItem, FlagSettings, InMemoryLinks, Link, LinkSource, Product, ProductType, Quote,
    SettingsFile, Shareability, DOWNLOADABLE_LINK_IDS_OPTION,
};
use std::cell::Cell;
use std::collections::BTreeMap;

pub fn settings(disable_guest_checkout: bool, links_shareable_by_default: bool) -> SettingsFile {
    SettingsFile {
        defaults: FlagSettings {
            disable_guest_checkout,
            links_shareable_by_default,
        },
        stores: vec![],
    }
}

pub fn downloadable_item(sku: &str, link_ids: Option<&str>) -> CartItem {
    let mut options = BTreeMap::new();
    if let Some(ids) = link_ids {
        options.insert(DOWNLOADABLE_LINK_IDS_OPTION.to_string(), ids.to_string());
    }
    CartItem {
        product: Product {
            sku: sku.to_string(),
            type_id: ProductType::Downloadable,
        },
        options,
    }
}

pub fn simple_item(sku: &str) -> CartItem {
    CartItem {
        product: Product {
            sku: sku.to_string(),
            type_id: ProductType::Simple,
        },
        options: BTreeMap::new(),
    }
}

pub fn catalog(entries: &[(u64, Shareability)]) -> InMemoryLinks {
    InMemoryLinks::new(entries.iter().map(|&(link_id, is_shareable)| Link {
        link_id,
        is_shareable,
    }))
}

/// Link source that counts lookups, for short-circuit assertions.
pub struct CountingLinks {
    inner: InMemoryLinks,
    pub calls: Cell<usize>,
}

impl CountingLinks {
    pub fn new(inner: InMemoryLinks) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
        }
    }
}

impl LinkSource for CountingLinks {
    fn links_by_ids(&self, ids: &[String]) -> anyhow::Result<Vec<Link>> {
        self.calls.set(self.calls.get() + 1);
        self.inner.links_by_ids(ids)
    }
}
