//! Property rank table.
//!
//! External static data mapping property names to integer ranks that
//! express canonical position. Consumed read-only; this crate never edits
//! a table. Tables are JSON of the shape `{"<prop>": {"value": <int>}}`.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::error::Result;

/// A single rank-table entry. External tables may carry extra fields;
/// only `value` is consumed.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RankEntry {
    pub value: u32,
}

/// Property-name → rank lookup.
///
/// Properties with no entry have no rank: they sort after every ranked
/// property and keep their relative order among themselves. There is no
/// numeric sentinel for "unknown", so a table may use arbitrarily large
/// ranks without colliding with that rule.
#[derive(Debug, Clone, Default)]
pub struct PropertyOrder {
    ranks: HashMap<String, RankEntry>,
}

impl PropertyOrder {
    /// Parse a rank table from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self {
            ranks: serde_json::from_str(json)?,
        })
    }

    /// The bundled Yandex property order.
    pub fn yandex() -> &'static PropertyOrder {
        static TABLE: OnceLock<PropertyOrder> = OnceLock::new();
        TABLE.get_or_init(|| {
            PropertyOrder::from_json(include_str!("../data/yandex-order.json"))
                .expect("bundled order table is valid JSON")
        })
    }

    /// Rank of a property, or `None` if the table has no entry for it.
    pub fn rank(&self, prop: &str) -> Option<u32> {
        self.ranks.get(prop).map(|entry| entry.value)
    }

    /// Sort key shared by the validator and the fixer: ranked properties
    /// compare by rank, unranked ones after all of them.
    pub(crate) fn sort_key(&self, prop: &str) -> u64 {
        match self.rank(prop) {
            Some(rank) => u64::from(rank),
            None => u64::MAX,
        }
    }
}
