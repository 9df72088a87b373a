//! `gengo.toml` configuration.
//!
//! ```toml
//! [render]
//! indent = "tab"            # or { spaces = 4 }
//! embed = "ident-only"      # or "never"
//! align = true
//! header = "// Code generated by gengo. DO NOT EDIT."
//!
//! [naming]
//! abbreviations = ["sku", "ean"]
//! ```
//!
//! Every key is optional. Unknown keys are rejected.

use std::str::FromStr;

use gengo_core::Caser;
use serde::{Deserialize, Serialize};

use crate::{EmbedPolicy, Error, Printer, Result, builder::Indent};

/// Parsed `gengo.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub render: RenderOptions,
    pub naming: NamingOptions,
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s)?;
        tracing::debug!(
            abbreviations = config.naming.abbreviations.len(),
            "parsed configuration"
        );
        Ok(config)
    }

    /// Printer configured by the `[render]` table.
    pub fn printer(&self) -> Printer {
        Printer::new(self.render.clone())
    }

    /// Name caser with the default abbreviations plus `[naming]` extras.
    pub fn caser(&self) -> Caser {
        Caser::default().with_abbreviations(&self.naming.abbreviations)
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_toml_str(s)
    }
}

/// Layout options for Go source output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    pub indent: Indent,
    pub embed: EmbedPolicy,
    /// Column-align struct fields and import comments.
    pub align: bool,
    /// Comment printed above everything else, e.g. a generated-code marker.
    pub header: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: Indent::GO,
            embed: EmbedPolicy::default(),
            align: true,
            header: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NamingOptions {
    /// Extra segments to upper-case, on top of the built-in set.
    pub abbreviations: Vec<String>,
}
