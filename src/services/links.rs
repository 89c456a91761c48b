use crate::domain::models::Link;
use std::collections::BTreeMap;

/// Looks up link records by raw id token.
///
/// Tokens come straight from a comma-separated cart option. A token that
/// matches no record is simply absent from the result, never an error; the
/// shareability check treats missing records permissively.
pub trait LinkSource {
    fn links_by_ids(&self, ids: &[String]) -> anyhow::Result<Vec<Link>>;
}

impl<T: LinkSource + ?Sized> LinkSource for &T {
    fn links_by_ids(&self, ids: &[String]) -> anyhow::Result<Vec<Link>> {
        (**self).links_by_ids(ids)
    }
}

/// Link catalog keyed by `link_id`, loadable from a JSON array.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLinks {
    by_id: BTreeMap<u64, Link>,
}

impl InMemoryLinks {
    pub fn new(links: impl IntoIterator<Item = Link>) -> Self {
        Self {
            by_id: links.into_iter().map(|l| (l.link_id, l)).collect(),
        }
    }

    pub fn from_json_str(raw: &str) -> anyhow::Result<Self> {
        let links: Vec<Link> = serde_json::from_str(raw)?;
        Ok(Self::new(links))
    }
}

impl LinkSource for InMemoryLinks {
    fn links_by_ids(&self, ids: &[String]) -> anyhow::Result<Vec<Link>> {
        let mut out = Vec::new();
        for raw in ids {
            // Non-numeric tokens match no record, same as unknown ids.
            let Ok(id) = raw.parse::<u64>() else {
                continue;
            };
            if let Some(link) = self.by_id.get(&id) {
                out.push(link.clone());
            }
        }
        Ok(out)
    }
}
