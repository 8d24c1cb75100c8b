//! TOML configuration for a conversion run.
//!
//! Every section is optional:
//!
//! ```toml
//! [conversion]
//! default_carrier = "HANJIN"
//! importer_placeholder = "상세페이지 참조"
//!
//! [categories.marine]
//! keywords = ["수산", "seafood"]
//! id_ranges = [{ start = 50000100, end = 50000199 }]
//!
//! [vocabulary.sale_status]
//! "판매 진행" = "SALE"
//!
//! [[vocabulary.carriers]]
//! alias = "씨제이"
//! carrier = "CJGLS"
//!
//! [[origins]]
//! name = "중국"
//! code = "0200037"
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use listing_model::{ConversionOptions, OriginTable};
use listing_transform::{ClassifierRules, RuleClassifier, Vocabulary, VocabularyExtensions};

/// One configured origin name and its marketplace code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginEntry {
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub conversion: ConversionOptions,
    pub categories: ClassifierRules,
    pub vocabulary: VocabularyExtensions,
    pub origins: Vec<OriginEntry>,
}

impl AppConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("parse configuration")
    }

    pub fn vocabulary(&self) -> Vocabulary {
        Vocabulary::with_extensions(&self.vocabulary)
    }

    pub fn classifier(&self) -> RuleClassifier {
        RuleClassifier::new(self.categories.clone())
    }

    /// Configured origins in file order.
    pub fn origin_table(&self) -> OriginTable {
        OriginTable::from_pairs(
            self.origins
                .iter()
                .map(|entry| (entry.name.clone(), entry.code.clone())),
        )
    }
}

/// Load configuration from `path`, or defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let Some(path) = path else {
        return Ok(AppConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("read configuration {}", path.display()))?;
    let config = AppConfig::from_toml(&text)
        .with_context(|| format!("load configuration {}", path.display()))?;
    info!(
        path = %path.display(),
        origins = config.origins.len(),
        carrier_aliases = config.vocabulary.carriers.len(),
        "loaded configuration"
    );
    Ok(config)
}
