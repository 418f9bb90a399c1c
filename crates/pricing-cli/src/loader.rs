//! Configuration file loading
//!
//! Checks existence before any computation begins so a missing file surfaces
//! as a distinct not-found error, then deserializes the YAML document.

use std::fs;
use std::path::Path;

use pricing_core::PricingConfig;
use tracing::debug;

use crate::error::{CliError, Result};

/// Load a pricing document, returning its name (the file stem) and contents.
pub fn load_config(path: &Path) -> Result<(String, PricingConfig)> {
    if !path.exists() {
        return Err(CliError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    let config = PricingConfig::parse_yaml(&content)?;
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "config".to_string());

    debug!(name = %name, clusters = config.clusters.len(), "loaded config");
    Ok((name, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_is_a_distinct_error() {
        let err = load_config(Path::new("/nonexistent/nowhere.yml")).unwrap_err();
        assert!(matches!(err, CliError::ConfigNotFound { .. }));
    }

    #[test]
    fn name_comes_from_the_file_stem() {
        let mut file = tempfile::Builder::new()
            .suffix(".yml")
            .tempfile()
            .unwrap();
        write!(
            file,
            "region: us-east-1\ndiscounts:\n  enterprise: 0\n  savingsPlan: 0\n"
        )
        .unwrap();
        let (name, config) = load_config(file.path()).unwrap();
        assert!(!name.is_empty());
        assert!(config.clusters.is_empty());
    }
}
