use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::debug;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyPolicy {
    Verbatim,
    Trim,
}

impl KeyPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Verbatim => "verbatim",
            Self::Trim => "trim",
        }
    }

    fn apply(self, line: &str) -> &str {
        match self {
            Self::Verbatim => line,
            Self::Trim => line.trim(),
        }
    }
}

pub fn normalize_key(name: &str) -> String {
    name.to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechnologyRecord {
    original_name: String,
    normalized_key: String,
    has_multiple_occurrences: bool,
    similar_names: BTreeSet<String>,
}

impl TechnologyRecord {
    pub fn new(original_name: &str) -> Self {
        Self {
            original_name: original_name.to_string(),
            normalized_key: normalize_key(original_name),
            has_multiple_occurrences: false,
            similar_names: BTreeSet::new(),
        }
    }

    pub fn original_name(&self) -> &str {
        &self.original_name
    }

    pub fn normalized_key(&self) -> &str {
        &self.normalized_key
    }

    pub fn has_multiple_occurrences(&self) -> bool {
        self.has_multiple_occurrences
    }

    pub fn similar_names(&self) -> &BTreeSet<String> {
        &self.similar_names
    }

    pub(crate) fn mark_multiple_occurrences(&mut self) {
        self.has_multiple_occurrences = true;
    }

    pub(crate) fn add_similar_name(&mut self, name: &str) {
        if !self.similar_names.contains(name) {
            self.similar_names.insert(name.to_string());
        }
    }
}

#[derive(Debug, Clone)]
pub struct Registry {
    records: BTreeMap<String, TechnologyRecord>,
    lines_read: usize,
    policy: KeyPolicy,
}

impl Registry {
    pub fn ingest<I, S>(lines: I, policy: KeyPolicy) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut registry = Self {
            records: BTreeMap::new(),
            lines_read: 0,
            policy,
        };

        for line in lines {
            registry.insert_line(line.as_ref());
        }

        registry
    }

    fn insert_line(&mut self, line: &str) {
        self.lines_read += 1;
        let name = self.policy.apply(line);
        let key = normalize_key(name);

        match self.records.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(TechnologyRecord::new(name));
            }
            Entry::Occupied(mut slot) => {
                let record = slot.get_mut();
                if !record.has_multiple_occurrences() {
                    debug!(
                        name = %record.original_name(),
                        repeated_as = %name,
                        "duplicate technology name"
                    );
                }
                record.mark_multiple_occurrences();
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    pub fn policy(&self) -> KeyPolicy {
        self.policy
    }

    pub fn get(&self, key: &str) -> Option<&TechnologyRecord> {
        self.records.get(key)
    }

    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut TechnologyRecord> {
        self.records.get_mut(key)
    }

    pub fn sorted_keys(&self) -> Vec<String> {
        self.records.keys().cloned().collect()
    }

    pub fn records(&self) -> impl Iterator<Item = &TechnologyRecord> {
        self.records.values()
    }

    pub fn duplicate_count(&self) -> usize {
        self.records()
            .filter(|record| record.has_multiple_occurrences())
            .count()
    }
}
