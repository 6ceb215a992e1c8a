//! Deal file loading.
//!
//! A deal file holds `[property]`, `[financing]` and an optional
//! `[thresholds]` table, as TOML or JSON chosen by file extension.

use deal_core::types::{FinancingTerms, PropertyInputs, Thresholds};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

use crate::config::validate_thresholds;
use crate::{CliError, Result};

/// One deal read from disk.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DealFile {
    /// Property assumptions
    pub property: PropertyInputs,
    /// Loan terms; defaults to 75% LTV at 7% over 30 years
    #[serde(default)]
    pub financing: FinancingTerms,
    /// Targets overriding the configured defaults
    #[serde(default)]
    pub thresholds: Option<Thresholds>,
}

/// Supported deal file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealFormat {
    /// `.toml`
    Toml,
    /// `.json`
    Json,
}

impl DealFormat {
    /// Format implied by the file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            _ => Err(CliError::UnsupportedFormat(if ext.is_empty() {
                "<none>".to_string()
            } else {
                ext
            })),
        }
    }
}

impl DealFile {
    /// Parse deal file contents in the given format.
    pub fn parse(content: &str, format: DealFormat, origin: &str) -> Result<Self> {
        let parsed = match format {
            DealFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            DealFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| CliError::Parse {
            path: origin.to_string(),
            message,
        })
    }

    /// Read, parse and validate a deal file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()));
        }
        let format = DealFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;
        let deal = Self::parse(&content, format, &path.display().to_string())?;
        deal.validate()?;

        debug!(
            path = %path.display(),
            ?format,
            units = deal.property.unit_count,
            price = deal.property.effective_price(),
            "loaded deal"
        );
        Ok(deal)
    }

    /// Reject structurally invalid assumptions.
    pub fn validate(&self) -> Result<()> {
        self.property.validate()?;
        self.financing.validate()?;
        if let Some(thresholds) = &self.thresholds {
            validate_thresholds(thresholds)?;
        }
        Ok(())
    }

    /// The deal's own thresholds, or `defaults` when the file has none.
    pub fn thresholds_or(&self, defaults: &Thresholds) -> Thresholds {
        self.thresholds.clone().unwrap_or_else(|| defaults.clone())
    }
}
