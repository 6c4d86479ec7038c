// src/domain/recent.rs

use serde::{Deserialize, Serialize};

/// How many ids the recently-viewed list keeps.
pub const MAX_RECENT: usize = 5;

/// Ordered, deduplicated, most-recent-first list of viewed listing ids,
/// capped at [`MAX_RECENT`]. Serializes transparently as a JSON array of
/// ids, which is the session-cookie wire form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentlyViewed {
    ids: Vec<String>,
}

impl RecentlyViewed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a list from untrusted ids (a decoded cookie): duplicates
    /// keep their first occurrence, anything past the cap is dropped.
    pub fn from_ids(ids: impl IntoIterator<Item = String>) -> Self {
        let mut recent = Self::new();
        for id in ids {
            if !recent.ids.contains(&id) {
                recent.ids.push(id);
            }
            if recent.ids.len() == MAX_RECENT {
                break;
            }
        }
        recent
    }

    /// Records a view: any existing occurrence is removed, the id is
    /// prepended, and the list is truncated to the cap.
    pub fn record(&mut self, id: &str) {
        self.ids.retain(|existing| existing != id);
        self.ids.insert(0, id.to_string());
        self.ids.truncate(MAX_RECENT);
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
