use indexmap::IndexMap;
use serde::Deserialize;

/// Parser settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParseConfig {
    /// Reject tables that declare no primary key
    pub require_primary_key: bool,
}

/// Rewriter settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RewriteConfig {
    /// Scalar columns whose content is semi-structured and stored as JSON,
    /// unless marked `__lift`
    pub structured_columns: Vec<String>,

    /// Nullable `DATETIME` column appended to every table
    pub etl_column: Option<String>,

    /// Embedded table-types replaced by some of their fields instead of a
    /// foreign key, e.g. `AmountInput = ["amount"]`
    pub simplify: IndexMap<String, Vec<String>>,
}

impl ParseConfig {
    /// Create a new ParseConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether tables must declare a primary key
    pub fn require_primary_key(mut self, require: bool) -> Self {
        self.require_primary_key = require;
        self
    }
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            structured_columns: vec!["customObject".to_string()],
            etl_column: None,
            simplify: IndexMap::new(),
        }
    }
}

impl RewriteConfig {
    /// Create a new RewriteConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the columns stored as JSON
    pub fn structured_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.structured_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Set the column appended to every table
    pub fn etl_column(mut self, name: impl Into<String>) -> Self {
        self.etl_column = Some(name.into());
        self
    }

    /// Replace embedded `ty` columns with the given template fields
    pub fn simplify<I, S>(mut self, ty: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.simplify
            .insert(ty.into(), fields.into_iter().map(Into::into).collect());
        self
    }

    pub(crate) fn is_structured(&self, column: &str) -> bool {
        self.structured_columns.iter().any(|name| name == column)
    }
}
