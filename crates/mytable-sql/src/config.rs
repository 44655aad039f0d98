use serde::Deserialize;

use std::str::FromStr;

/// Emitter settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmitConfig {
    /// Storage type of structured-text columns
    pub json_type: JsonType,

    /// Order tables are created in
    pub order: Order,

    /// Render `CREATE TABLE IF NOT EXISTS` for every table
    pub if_not_exists: bool,

    /// Prefix the script with a `DROP TABLE IF EXISTS` per table
    pub drop_tables: bool,

    /// Append `CASCADE` to the drop statements
    pub drop_cascade: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    /// `JSON`
    #[default]
    Json,

    /// `MEDIUMTEXT`, for servers without a JSON type
    Mediumtext,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    /// Declared tables in source order, each followed by the tables
    /// synthesized for it
    #[default]
    Declaration,

    /// Most referenced tables first, ties kept in declaration order
    Dependency,
}

impl EmitConfig {
    /// Create a new EmitConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the structured-text storage type
    pub fn json_type(mut self, json_type: JsonType) -> Self {
        self.json_type = json_type;
        self
    }

    /// Set the table order
    pub fn order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }

    /// Set whether every table is created with `IF NOT EXISTS`
    pub fn if_not_exists(mut self, if_not_exists: bool) -> Self {
        self.if_not_exists = if_not_exists;
        self
    }

    /// Set whether tables are dropped first, and whether with `CASCADE`
    pub fn drop_tables(mut self, drop_tables: bool, cascade: bool) -> Self {
        self.drop_tables = drop_tables;
        self.drop_cascade = cascade;
        self
    }
}

impl JsonType {
    pub fn as_sql(self) -> &'static str {
        match self {
            JsonType::Json => "JSON",
            JsonType::Mediumtext => "MEDIUMTEXT",
        }
    }
}

impl FromStr for Order {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "declaration" => Ok(Order::Declaration),
            "dependency" => Ok(Order::Dependency),
            _ => Err(format!(
                "unknown order `{s}`, expected `declaration` or `dependency`"
            )),
        }
    }
}
