//! Filter selection and query string building.
//!
//! A filter whose value is the sentinel [`ALL`] carries no constraint and is
//! never sent to the backend.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Sentinel filter value meaning "no constraint for this dimension".
pub const ALL: &str = "all";

/// The four filter dimensions of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKey {
    Category,
    StockLevel,
    ExpiryRange,
    Tag,
}

impl FilterKey {
    pub const ALL_KEYS: [FilterKey; 4] = [
        FilterKey::Category,
        FilterKey::StockLevel,
        FilterKey::ExpiryRange,
        FilterKey::Tag,
    ];

    /// The filter's name as used in the UI state.
    pub fn name(&self) -> &'static str {
        match self {
            FilterKey::Category => "category",
            FilterKey::StockLevel => "stockLevel",
            FilterKey::ExpiryRange => "expiryRange",
            FilterKey::Tag => "tag",
        }
    }

    /// Look up a filter by its UI-state name.
    pub fn from_name(name: &str) -> Option<FilterKey> {
        FilterKey::ALL_KEYS.into_iter().find(|k| k.name() == name)
    }

    /// DOM id of the `<select>` control backing this filter.
    pub fn dom_id(&self) -> &'static str {
        match self {
            FilterKey::Category => "categoryFilter",
            FilterKey::StockLevel => "stockLevelFilter",
            FilterKey::ExpiryRange => "expiryRangeFilter",
            FilterKey::Tag => "tagFilter",
        }
    }
}

/// Current values of the four filter controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSelection {
    pub category: String,
    pub stock_level: String,
    pub expiry_range: String,
    pub tag: String,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            category: ALL.to_string(),
            stock_level: ALL.to_string(),
            expiry_range: ALL.to_string(),
            tag: ALL.to_string(),
        }
    }
}

impl FilterSelection {
    /// Build a selection from `(name, value)` pairs. Absent and unknown
    /// names are ignored, so missing filters stay at [`ALL`].
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut selection = Self::default();
        for (name, value) in pairs {
            if let Some(key) = FilterKey::from_name(name.as_ref()) {
                selection.set(key, value);
            }
        }
        selection
    }

    pub fn value(&self, key: FilterKey) -> &str {
        match key {
            FilterKey::Category => &self.category,
            FilterKey::StockLevel => &self.stock_level,
            FilterKey::ExpiryRange => &self.expiry_range,
            FilterKey::Tag => &self.tag,
        }
    }

    pub fn set(&mut self, key: FilterKey, value: impl Into<String>) {
        let slot = match key {
            FilterKey::Category => &mut self.category,
            FilterKey::StockLevel => &mut self.stock_level,
            FilterKey::ExpiryRange => &mut self.expiry_range,
            FilterKey::Tag => &mut self.tag,
        };
        *slot = value.into();
    }

    pub fn with(mut self, key: FilterKey, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// True when no dimension is constrained.
    pub fn is_unfiltered(&self) -> bool {
        FilterKey::ALL_KEYS.iter().all(|k| self.value(*k) == ALL)
    }
}

/// Maps filter dimensions to the query parameter names an endpoint expects.
/// Filters the map does not name are never sent to that endpoint.
pub type ParamMap = &'static [(FilterKey, &'static str)];

/// Build `?a=b&c=d` from the constrained filters named in `params`.
///
/// Values are form-urlencoded the same way a browser's `URLSearchParams`
/// encodes them. Returns an empty string when nothing is constrained.
pub fn build_query(filters: &FilterSelection, params: ParamMap) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    let mut constrained = 0;
    for (key, param) in params {
        let value = filters.value(*key);
        if value == ALL {
            continue;
        }
        serializer.append_pair(param, value);
        constrained += 1;
    }

    if constrained == 0 {
        String::new()
    } else {
        format!("?{}", serializer.finish())
    }
}
