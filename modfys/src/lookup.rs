//! Catalog lookup results and their rendering
//!
//! A [`Lookup`] is what [`crate::Catalog::lookup`] hands back for a key: one
//! of the two listings, a single record, or a miss with guidance text. It
//! renders as a pretty-printed JSON document whose fields keep record order.

use serde::Serialize;

use crate::catalog::{InteractionRecord, ParticleRecord};
use crate::error::Result;

/// Key that lists all particle symbols
pub const PARTICLES_KEY: &str = "particles";

/// Key that lists all interaction names
pub const INTERACTIONS_KEY: &str = "interactions";

/// Text returned alongside a lookup miss
pub const NOT_FOUND_GUIDANCE: &str = "The requested name was not found. If you entered the name manually please check your spelling and try again.";

/// Result of resolving a catalog key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Lookup<'a> {
    /// Particle symbols in catalog order
    Particles(Vec<&'a str>),
    /// Interaction names in catalog order
    Interactions(Vec<&'a str>),
    /// A single particle record
    Particle(&'a ParticleRecord),
    /// A single interaction record
    Interaction(&'a InteractionRecord),
    /// The key matched nothing
    NotFound {
        key: String,
        guidance: &'static str,
    },
}

impl<'a> Lookup<'a> {
    /// Check whether the key matched nothing
    pub fn is_not_found(&self) -> bool {
        matches!(self, Lookup::NotFound { .. })
    }

    /// Get the particle record, if this is one
    pub fn as_particle(&self) -> Option<&'a ParticleRecord> {
        match self {
            Lookup::Particle(record) => Some(*record),
            _ => None,
        }
    }

    /// Get the interaction record, if this is one
    pub fn as_interaction(&self) -> Option<&'a InteractionRecord> {
        match self {
            Lookup::Interaction(record) => Some(*record),
            _ => None,
        }
    }

    /// Render as a pretty-printed JSON document (two-space indent)
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl std::fmt::Display for Lookup<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Lookup::NotFound { guidance, .. } => write!(f, "{guidance}"),
            _ => {
                let json = self.to_json_pretty().map_err(|_| std::fmt::Error)?;
                write!(f, "{json}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Catalog;

    #[test]
    fn test_lookup_electron() {
        let catalog = Catalog::standard_model().unwrap();
        let lookup = catalog.lookup("e");
        let electron = lookup.as_particle().unwrap();
        assert_eq!(electron.particle, "electron");
        assert_eq!(electron.antiparticle, "positron");
        assert_eq!(
            electron.interactions,
            vec!["strong", "weak", "electromagnetic", "gravity"]
        );
        assert!(lookup.as_interaction().is_none());
    }

    #[test]
    fn test_record_rendering_keeps_field_order() {
        let catalog = Catalog::standard_model().unwrap();
        let json = catalog.lookup("e").to_json_pretty().unwrap();

        let expected = r#"{
  "main class": "lepton",
  "antiparticle": "positron",
  "mass": "510.99 keV/c^2 = 9.11e-31 kg",
  "particle": "electron",
  "particle type": "fermion",
  "electric charge": "-1.60e-19 C",
  "symbol": "e",
  "interactions": [
    "strong",
    "weak",
    "electromagnetic",
    "gravity"
  ],
  "spin": "1/2"
}"#;
        assert_eq!(json, expected);
        assert_eq!(catalog.lookup("e").to_string(), expected);
    }

    #[test]
    fn test_listings() {
        let catalog = Catalog::standard_model().unwrap();

        match catalog.lookup(PARTICLES_KEY) {
            Lookup::Particles(symbols) => assert_eq!(symbols, catalog.particle_symbols()),
            other => panic!("expected particle listing, got {other:?}"),
        }

        let interactions = catalog.lookup(INTERACTIONS_KEY);
        assert_eq!(
            interactions,
            Lookup::Interactions(vec!["strong", "weak", "electromagnetic", "gravity"])
        );
        assert_eq!(
            interactions.to_json_pretty().unwrap(),
            "[\n  \"strong\",\n  \"weak\",\n  \"electromagnetic\",\n  \"gravity\"\n]"
        );
    }

    #[test]
    fn test_lookup_interaction() {
        let catalog = Catalog::standard_model().unwrap();
        let lookup = catalog.lookup("electromagnetic");
        let record = lookup.as_interaction().unwrap();
        assert_eq!(record.mediators, vec!["gamma"]);
        assert!(lookup
            .to_json_pretty()
            .unwrap()
            .starts_with("{\n  \"interaction\": \"electromagnetic\""));
    }

    #[test]
    fn test_lookup_miss() {
        let catalog = Catalog::standard_model().unwrap();

        for key in ["electron", "E", "Strong", "", "particle"] {
            let lookup = catalog.lookup(key);
            assert!(lookup.is_not_found(), "{key:?} should miss");
            assert_eq!(lookup.to_string(), NOT_FOUND_GUIDANCE);
        }

        assert_eq!(
            catalog.lookup("quark"),
            Lookup::NotFound {
                key: "quark".to_string(),
                guidance: NOT_FOUND_GUIDANCE,
            }
        );
    }
}
