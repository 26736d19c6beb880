//! State record as shipped in the embedded dataset.

use serde::{Deserialize, Serialize};

/// A Nigerian state (or the FCT) with its senatorial districts and LGAs.
///
/// Field order within `senatorial_districts` and `lgas` follows the dataset
/// and is preserved as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StateRecord {
    /// Canonical display name, e.g. "Lagos" or "Federal Capital Territory"
    #[serde(rename = "state")]
    pub name: String,

    /// Senatorial districts, one Senate seat each
    pub senatorial_districts: Vec<String>,

    /// Local government areas
    pub lgas: Vec<String>,
}

impl StateRecord {
    /// Create a record from its name, districts and LGAs.
    pub fn new(
        name: impl Into<String>,
        senatorial_districts: Vec<String>,
        lgas: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            senatorial_districts,
            lgas,
        }
    }
}
