//! Location registry: the immutable table of states and its lookups.
//!
//! Queries are matched exactly after normalization (trim + lowercase), with
//! the FCT aliases ("fct", "f.c.t", "f c t", "abuja") resolved first.

mod normalize;

use std::sync::LazyLock;

use hashbrown::{HashMap, HashSet};
use tracing::{debug, info};

use crate::error::{DatasetError, LookupError};
use crate::models::StateRecord;

pub use normalize::{normalize, resolve_alias, FCT_CANONICAL_NAME};

/// Dataset compiled into the binary, in its authoritative order.
const EMBEDDED_DATASET: &str = include_str!("../data/states.json");

static EMBEDDED: LazyLock<Registry> = LazyLock::new(|| {
    let registry = Registry::from_json(EMBEDDED_DATASET)
        .unwrap_or_else(|e| panic!("Embedded state dataset is invalid: {}", e));
    info!("Loaded {} states from embedded dataset", registry.len());
    registry
});

/// Immutable table of state records.
#[derive(Debug)]
pub struct Registry {
    states: Vec<StateRecord>,
    /// Normalized name -> position in `states`
    by_name: HashMap<String, usize>,
}

impl Registry {
    /// Process-wide registry built from the embedded dataset on first use.
    pub fn embedded() -> &'static Registry {
        &EMBEDDED
    }

    /// Parse a JSON array of state records and validate it.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let records: Vec<StateRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Build a registry, keeping record order as given.
    ///
    /// Rejects blank or case-insensitively duplicated names, records without
    /// districts or LGAs, and districts or LGAs repeated within a record.
    pub fn from_records(records: Vec<StateRecord>) -> Result<Self, DatasetError> {
        let mut by_name = HashMap::with_capacity(records.len());

        for (position, record) in records.iter().enumerate() {
            let key = normalize(&record.name);
            if key.is_empty() {
                return Err(DatasetError::EmptyName(position));
            }
            if record.senatorial_districts.is_empty() {
                return Err(DatasetError::NoSenatorialDistricts(record.name.clone()));
            }
            if record.lgas.is_empty() {
                return Err(DatasetError::NoLgas(record.name.clone()));
            }
            check_unique(&record.name, &record.senatorial_districts)?;
            check_unique(&record.name, &record.lgas)?;

            if by_name.insert(key, position).is_some() {
                return Err(DatasetError::DuplicateState(record.name.clone()));
            }
        }

        debug!("Registry built with {} states", records.len());

        Ok(Self {
            states: records,
            by_name,
        })
    }

    /// Number of states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether the registry holds no states.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// All records in dataset order.
    pub fn list_all(&self) -> &[StateRecord] {
        &self.states
    }

    /// State names in dataset order.
    pub fn list_names(&self) -> Vec<&str> {
        self.states.iter().map(|s| s.name.as_str()).collect()
    }

    /// Iterate records in dataset order.
    pub fn iter(&self) -> std::slice::Iter<'_, StateRecord> {
        self.states.iter()
    }

    /// Resolve a state name (or FCT alias) to its record.
    pub fn find_state(&self, query: &str) -> Result<&StateRecord, LookupError> {
        let normalized = normalize(query);
        if normalized.is_empty() {
            return Err(LookupError::InvalidInput);
        }

        let resolved = resolve_alias(&normalized);
        match self.by_name.get(&normalize(resolved)) {
            Some(&position) => Ok(&self.states[position]),
            None => {
                debug!("No state matches query {:?}", query);
                Err(LookupError::StateNotFound(query.to_string()))
            }
        }
    }

    /// Senatorial districts of the matching state.
    pub fn districts_of(&self, query: &str) -> Result<&[String], LookupError> {
        self.find_state(query)
            .map(|record| record.senatorial_districts.as_slice())
    }

    /// Full record of the matching state.
    pub fn record_of(&self, query: &str) -> Result<&StateRecord, LookupError> {
        self.find_state(query)
    }

    /// Whether `query` resolves to a state. Blank queries resolve to nothing.
    pub fn contains(&self, query: &str) -> bool {
        self.find_state(query).is_ok()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a StateRecord;
    type IntoIter = std::slice::Iter<'a, StateRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn check_unique(state: &str, entries: &[String]) -> Result<(), DatasetError> {
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        if !seen.insert(entry.as_str()) {
            return Err(DatasetError::DuplicateEntry {
                state: state.to_string(),
                entry: entry.clone(),
            });
        }
    }
    Ok(())
}
