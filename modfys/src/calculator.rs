//! Calculator facade pairing a formula evaluator with a catalog

use modfys_core::Evaluator;

use crate::catalog::Catalog;
use crate::config::ModfysConfig;
use crate::error::Result;
use crate::lookup::Lookup;

/// Formula evaluator and reference catalog, loaded once and read many times
#[derive(Debug, Clone)]
pub struct Calculator {
    evaluator: Evaluator,
    catalog: Catalog,
}

impl Calculator {
    /// Create a calculator from its parts
    pub fn new(evaluator: Evaluator, catalog: Catalog) -> Self {
        Self { evaluator, catalog }
    }

    /// Build a calculator from configuration
    pub fn from_config(config: &ModfysConfig) -> Result<Self> {
        let catalog = config.load_catalog()?;
        Ok(Self::new(Evaluator::new(config.constants), catalog))
    }

    /// Course constants with the embedded Standard Model table
    pub fn standard_model() -> Result<Self> {
        Self::from_config(&ModfysConfig::default())
    }

    /// Get the formula evaluator
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Get the reference catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Resolve a catalog key
    pub fn lookup(&self, key: &str) -> Lookup<'_> {
        self.catalog.lookup(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modfys_core::{PhysicalConstants, SPEED_OF_LIGHT};

    #[test]
    fn test_standard_model_calculator() {
        let calculator = Calculator::standard_model().unwrap();
        let gamma = calculator
            .evaluator()
            .lorentz_factor(0.950 * SPEED_OF_LIGHT)
            .unwrap();
        assert!((gamma - 3.2025630761017423).abs() < 1e-12);

        let electron = calculator.lookup("e");
        assert_eq!(electron.as_particle().unwrap().antiparticle, "positron");
        assert_eq!(calculator.catalog().interaction_names().len(), 4);
    }

    #[test]
    fn test_configured_constants() {
        let config = ModfysConfig::default().with_constants(PhysicalConstants::CODATA);
        let calculator = Calculator::from_config(&config).unwrap();
        assert_eq!(
            *calculator.evaluator().constants(),
            PhysicalConstants::CODATA
        );
        assert!(calculator.evaluator().lorentz_factor(3e8).is_err());
    }

    #[test]
    fn test_shared_across_threads() {
        let calculator = std::sync::Arc::new(Calculator::standard_model().unwrap());

        let handles: Vec<_> = ["u", "e", "H", "gravity"]
            .into_iter()
            .map(|key| {
                let calculator = std::sync::Arc::clone(&calculator);
                std::thread::spawn(move || !calculator.lookup(key).is_not_found())
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
