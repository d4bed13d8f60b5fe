//! Typed engine configuration.
//!
//! Loaded from TOML (or any serde source) and validated once, before the
//! paginator is built. Per-query overrides travel in `PaginationOptions`.

use crate::{
    error::ConfigError,
    paginate::ReorientMode,
    types::{PageSize, RecordId, SortOrder, is_valid_field_name},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

///
/// CONSTANTS
///

pub const DEFAULT_SORT_FIELD: &str = "post_date";
pub const DEFAULT_TIEBREAK_FIELD: &str = "id";
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_MAX_PAGE_SIZE: u32 = 100;

///
/// PaginationConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaginationConfig {
    /// Natural sort field used when a query names none.
    pub default_sort_field: String,

    /// Column appended to every ordering. It must be the column holding the
    /// record's `RecordId`: tiebreak comparisons and SQL binds always use
    /// `Record::id`, whatever this column is called.
    pub tiebreak_field: String,

    /// Fields a request may sort by. Empty allows any valid field name.
    pub sortable_fields: Vec<String>,

    pub default_sort_order: SortOrder,

    pub page_size: u32,

    /// Policy cap applied to requested page sizes.
    pub page_size_cap: Option<u32>,

    pub reorient: ReorientMode,

    pub params: ParamNames,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_sort_field: DEFAULT_SORT_FIELD.to_string(),
            tiebreak_field: DEFAULT_TIEBREAK_FIELD.to_string(),
            sortable_fields: Vec::new(),
            default_sort_order: SortOrder::Desc,
            page_size: DEFAULT_PAGE_SIZE,
            page_size_cap: Some(DEFAULT_MAX_PAGE_SIZE),
            reorient: ReorientMode::InProcess,
            params: ParamNames::default(),
        }
    }
}

impl PaginationConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_field("default_sort_field", &self.default_sort_field)?;
        check_field("tiebreak_field", &self.tiebreak_field)?;
        for field in &self.sortable_fields {
            check_field("sortable_fields", field)?;
        }

        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize {
                setting: "page_size",
            });
        }
        if let Some(max) = self.page_size_cap {
            if max == 0 {
                return Err(ConfigError::ZeroPageSize {
                    setting: "page_size_cap",
                });
            }
            if self.page_size > max {
                return Err(ConfigError::DefaultExceedsMax {
                    default: self.page_size,
                    max,
                });
            }
        }

        self.params.validate()
    }

    /// Whether a request may sort by `field`.
    ///
    /// The default field and the tiebreak are always sortable.
    #[must_use]
    pub fn is_sortable(&self, field: &str) -> bool {
        if field == self.default_sort_field || field == self.tiebreak_field {
            return true;
        }

        is_valid_field_name(field)
            && (self.sortable_fields.is_empty() || self.sortable_fields.iter().any(|f| f == field))
    }

    #[must_use]
    pub fn default_page_size(&self) -> PageSize {
        PageSize::new(self.page_size).unwrap_or(PageSize::MIN)
    }

    #[must_use]
    pub fn max_page_size(&self) -> Option<PageSize> {
        self.page_size_cap.and_then(|max| PageSize::new(max).ok())
    }
}

fn check_field(setting: &'static str, field: &str) -> Result<(), ConfigError> {
    if is_valid_field_name(field) {
        Ok(())
    } else {
        Err(ConfigError::InvalidFieldName {
            setting,
            field: field.to_string(),
        })
    }
}

///
/// ParamNames
///
/// Request parameter names the host reads navigation input from.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParamNames {
    pub forward: String,
    pub backward: String,
    pub page_size: String,
    pub sort_field: String,
    pub sort_order: String,
    pub cursor_encoding: CursorEncoding,
}

impl Default for ParamNames {
    fn default() -> Self {
        Self {
            forward: "last_seen".to_string(),
            backward: "first_seen".to_string(),
            page_size: "per_page".to_string(),
            sort_field: "orderby".to_string(),
            sort_order: "order".to_string(),
            cursor_encoding: CursorEncoding::Decimal,
        }
    }
}

impl ParamNames {
    fn validate(&self) -> Result<(), ConfigError> {
        let names = [
            ("params.forward", &self.forward),
            ("params.backward", &self.backward),
            ("params.page_size", &self.page_size),
            ("params.sort_field", &self.sort_field),
            ("params.sort_order", &self.sort_order),
        ];

        let mut seen = BTreeSet::new();
        for (setting, name) in names {
            if name.trim().is_empty() {
                return Err(ConfigError::EmptyParamName { setting });
            }
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::DuplicateParamName { name: name.clone() });
            }
        }

        Ok(())
    }
}

///
/// CursorEncoding
///
/// How cursor ids appear in request parameters and rendered links.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CursorEncoding {
    #[default]
    Decimal,
    Hex,
}

impl CursorEncoding {
    #[must_use]
    pub fn encode(self, id: RecordId) -> String {
        match self {
            Self::Decimal => id.to_string(),
            Self::Hex => id.to_token(),
        }
    }

    /// Decode a cursor parameter; `None` when it is not a valid id.
    #[must_use]
    pub fn decode(self, raw: &str) -> Option<RecordId> {
        match self {
            Self::Decimal => raw.trim().parse().ok(),
            Self::Hex => RecordId::from_token(raw).ok(),
        }
    }
}

///
/// TESTS
///
