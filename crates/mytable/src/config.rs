use mytable_core::{ParseConfig, RewriteConfig};
use mytable_sql::EmitConfig;

use serde::Deserialize;
use std::str::FromStr;

/// Settings for every stage of the pipeline.
///
/// Every section and field has a default, so a partial TOML document is
/// a valid configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub parse: ParseConfig,
    pub rewrite: RewriteConfig,
    pub emit: EmitConfig,
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the parser configuration
    pub fn parse(mut self, parse: ParseConfig) -> Self {
        self.parse = parse;
        self
    }

    /// Set the rewriter configuration
    pub fn rewrite(mut self, rewrite: RewriteConfig) -> Self {
        self.rewrite = rewrite;
        self
    }

    /// Set the emitter configuration
    pub fn emit(mut self, emit: EmitConfig) -> Self {
        self.emit = emit;
        self
    }

    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}

impl FromStr for Config {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Config::from_toml_str(s)
    }
}
