//! Injectable role-to-synonym tables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use tarifa_model::ColumnRole;

/// Ordered synonym lists per semantic role.
///
/// Synonyms are stored uppercase and matched as substrings of uppercased
/// header labels. List order is priority order: the curated tables put the
/// most specific spellings first so `P.V.P.` wins over a generic `PRECIO`
/// column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleSynonyms {
    entries: BTreeMap<ColumnRole, Vec<String>>,
}

impl RoleSynonyms {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends synonyms for a role, preserving insertion order.
    pub fn extend<I, S>(&mut self, role: ColumnRole, synonyms: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let list = self.entries.entry(role).or_default();
        for synonym in synonyms {
            let normalized = synonym.as_ref().trim().to_uppercase();
            if !normalized.is_empty() && !list.contains(&normalized) {
                list.push(normalized);
            }
        }
    }

    /// Builder form of [`extend`](Self::extend).
    pub fn with<I, S>(mut self, role: ColumnRole, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extend(role, synonyms);
        self
    }

    /// Synonyms for a role, in priority order. Empty for unknown roles.
    pub fn synonyms(&self, role: ColumnRole) -> &[String] {
        self.entries
            .get(&role)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.values().all(Vec::is_empty)
    }
}
