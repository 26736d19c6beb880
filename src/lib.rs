//! ng-states - Nigerian states, senatorial districts and LGAs
//!
//! Lookups over an embedded, read-only dataset of the 36 states and the
//! Federal Capital Territory. State names are matched case-insensitively and
//! the FCT also answers to "FCT", "F.C.T", "F C T" and "Abuja".
//!
//! ```
//! let districts = ng_states::senatorial_districts("Oyo").unwrap();
//! assert_eq!(districts, ["Oyo Central", "Oyo North", "Oyo South"]);
//!
//! let fct = ng_states::lgas("abuja").unwrap();
//! assert_eq!(fct.name, "Federal Capital Territory");
//! ```

pub mod error;
pub mod models;
pub mod registry;

pub use error::{DatasetError, LookupError};
pub use models::StateRecord;
pub use registry::Registry;

/// Every state with its districts and LGAs, in dataset order.
pub fn all() -> &'static [StateRecord] {
    Registry::embedded().list_all()
}

/// State names in dataset order.
pub fn states() -> Vec<&'static str> {
    Registry::embedded().list_names()
}

/// Senatorial districts for `state`.
pub fn senatorial_districts(state: &str) -> Result<&'static [String], LookupError> {
    Registry::embedded().districts_of(state)
}

/// Full record (name, senatorial districts, LGAs) for `state`.
pub fn lgas(state: &str) -> Result<&'static StateRecord, LookupError> {
    Registry::embedded().record_of(state)
}
