//! In-process configuration for a [`crate::Calculator`]

use std::path::PathBuf;

use modfys_core::PhysicalConstants;

use crate::catalog::Catalog;
use crate::error::Result;

/// Where the reference catalog is read from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogSource {
    /// The Standard Model table compiled into the crate
    #[default]
    Embedded,
    /// A JSON document on disk
    Path(PathBuf),
    /// A JSON document held in memory
    Json(String),
}

/// Configuration for building a calculator
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModfysConfig {
    /// Constants every formula evaluates against
    pub constants: PhysicalConstants,
    /// Source of the reference catalog
    pub catalog: CatalogSource,
}

impl ModfysConfig {
    /// Set the physical constants
    pub fn with_constants(mut self, constants: PhysicalConstants) -> Self {
        self.constants = constants;
        self
    }

    /// Read the catalog from a JSON file
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog = CatalogSource::Path(path.into());
        self
    }

    /// Read the catalog from an in-memory JSON document
    pub fn with_catalog_json(mut self, json: impl Into<String>) -> Self {
        self.catalog = CatalogSource::Json(json.into());
        self
    }

    /// Load the configured catalog
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            CatalogSource::Embedded => Catalog::standard_model(),
            CatalogSource::Path(path) => Catalog::from_path(path),
            CatalogSource::Json(json) => Catalog::from_json_str(json),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_defaults() {
        let config = ModfysConfig::default();
        assert_eq!(config.constants, PhysicalConstants::COURSE);
        assert_eq!(config.catalog, CatalogSource::Embedded);
        assert_eq!(config.load_catalog().unwrap().particles().len(), 17);
    }

    #[test]
    fn test_builders() {
        let config = ModfysConfig::default()
            .with_constants(PhysicalConstants::CODATA)
            .with_catalog_path("catalog.json");
        assert_eq!(config.constants, PhysicalConstants::CODATA);
        assert_eq!(
            config.catalog,
            CatalogSource::Path(PathBuf::from("catalog.json"))
        );
    }

    #[test]
    fn test_catalog_from_file() {
        let path = std::env::temp_dir().join(format!(
            "modfys-catalog-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"particles": [], "interactions": []}"#).unwrap();

        let catalog = ModfysConfig::default()
            .with_catalog_path(&path)
            .load_catalog()
            .unwrap();
        assert!(catalog.is_empty());

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_invalid_inline_catalog() {
        let err = ModfysConfig::default()
            .with_catalog_json("not json")
            .load_catalog()
            .unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
