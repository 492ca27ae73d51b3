//! Standard Model reference catalog
//!
//! The catalog holds particle and interaction records in their source order
//! together with an index from lookup key to record. It is immutable once
//! built and is handed to callers by reference.

use std::io::Read;
use std::path::Path;

use hashbrown::HashMap;
use modfys_core::ModfysError;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::lookup::{Lookup, INTERACTIONS_KEY, NOT_FOUND_GUIDANCE, PARTICLES_KEY};

/// Embedded Standard Model table
const STANDARD_MODEL_JSON: &str = include_str!("../data/standard_model.json");

/// Family a particle belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticleClass {
    Quark,
    Lepton,
    #[serde(rename = "gauge boson")]
    GaugeBoson,
    #[serde(rename = "scalar boson")]
    ScalarBoson,
}

/// Spin statistics of a particle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticleKind {
    Fermion,
    Boson,
}

/// One elementary particle
///
/// Field order is the serialization order of the rendered record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticleRecord {
    #[serde(rename = "main class")]
    pub main_class: ParticleClass,
    pub antiparticle: String,
    /// Display string, e.g. `"510.99 keV/c^2 = 9.11e-31 kg"`
    pub mass: String,
    pub particle: String,
    #[serde(rename = "particle type")]
    pub particle_type: ParticleKind,
    /// Display string, e.g. `"-1.60e-19 C"`
    #[serde(rename = "electric charge")]
    pub electric_charge: String,
    /// Lookup key
    pub symbol: String,
    /// Names of the interactions the particle takes part in
    pub interactions: Vec<String>,
    pub spin: String,
}

/// One fundamental interaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionRecord {
    /// Lookup key
    pub interaction: String,
    /// Force carriers, by particle symbol where one exists
    pub mediators: Vec<String>,
    #[serde(rename = "acts on")]
    pub acts_on: String,
    #[serde(rename = "relative strength")]
    pub relative_strength: String,
    pub range: String,
    pub theory: String,
}

/// On-disk layout of a catalog document
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    particles: Vec<ParticleRecord>,
    interactions: Vec<InteractionRecord>,
}

/// Position of a record behind a lookup key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    Particle(usize),
    Interaction(usize),
}

/// Immutable, indexed collection of particle and interaction records
#[derive(Debug, Clone)]
pub struct Catalog {
    particles: Vec<ParticleRecord>,
    interactions: Vec<InteractionRecord>,
    index: HashMap<String, Entry>,
}

impl Catalog {
    /// Build a catalog from records
    ///
    /// Keys must be unique across both tables, must not be one of the
    /// list keys, and every interaction a particle names must be present.
    pub fn new(
        particles: Vec<ParticleRecord>,
        interactions: Vec<InteractionRecord>,
    ) -> Result<Self> {
        let mut index = HashMap::with_capacity(particles.len() + interactions.len());

        let keys = particles
            .iter()
            .enumerate()
            .map(|(i, p)| (p.symbol.as_str(), Entry::Particle(i)))
            .chain(
                interactions
                    .iter()
                    .enumerate()
                    .map(|(i, r)| (r.interaction.as_str(), Entry::Interaction(i))),
            );

        for (key, entry) in keys {
            if key == PARTICLES_KEY || key == INTERACTIONS_KEY {
                return Err(Error::ReservedKey(key.to_string()));
            }
            if index.insert(key.to_string(), entry).is_some() {
                return Err(Error::DuplicateKey(key.to_string()));
            }
        }

        for particle in &particles {
            for interaction in &particle.interactions {
                if !matches!(index.get(interaction), Some(Entry::Interaction(_))) {
                    return Err(Error::UnknownInteraction {
                        symbol: particle.symbol.clone(),
                        interaction: interaction.clone(),
                    });
                }
            }
        }

        log::info!(
            "Loaded catalog with {} particles and {} interactions",
            particles.len(),
            interactions.len()
        );

        Ok(Self {
            particles,
            interactions,
            index,
        })
    }

    /// Parse a catalog document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::new(document.particles, document.interactions)
    }

    /// Read a catalog document from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let document: CatalogDocument = serde_json::from_reader(reader)?;
        Self::new(document.particles, document.interactions)
    }

    /// Read a catalog document from a file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Reading catalog from {}", path.display());
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Load the embedded Standard Model table
    pub fn standard_model() -> Result<Self> {
        log::debug!("Reading embedded Standard Model catalog");
        Self::from_json_str(STANDARD_MODEL_JSON)
    }

    /// All particles in catalog order
    pub fn particles(&self) -> &[ParticleRecord] {
        &self.particles
    }

    /// All interactions in catalog order
    pub fn interactions(&self) -> &[InteractionRecord] {
        &self.interactions
    }

    /// Particle symbols in catalog order
    pub fn particle_symbols(&self) -> Vec<&str> {
        self.particles.iter().map(|p| p.symbol.as_str()).collect()
    }

    /// Interaction names in catalog order
    pub fn interaction_names(&self) -> Vec<&str> {
        self.interactions
            .iter()
            .map(|r| r.interaction.as_str())
            .collect()
    }

    /// Total number of records
    pub fn len(&self) -> usize {
        self.particles.len() + self.interactions.len()
    }

    /// Check whether the catalog holds no records
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get a particle by symbol
    pub fn particle(&self, symbol: &str) -> Result<&ParticleRecord> {
        match self.index.get(symbol) {
            Some(Entry::Particle(i)) => Ok(&self.particles[*i]),
            _ => Err(Error::Core(ModfysError::NotFound)),
        }
    }

    /// Get an interaction by name
    pub fn interaction(&self, name: &str) -> Result<&InteractionRecord> {
        match self.index.get(name) {
            Some(Entry::Interaction(i)) => Ok(&self.interactions[*i]),
            _ => Err(Error::Core(ModfysError::NotFound)),
        }
    }

    /// Resolve a key to a symbol list, a name list, a record or a miss
    ///
    /// Matching is exact and case-sensitive.
    pub fn lookup(&self, key: &str) -> Lookup<'_> {
        match key {
            PARTICLES_KEY => return Lookup::Particles(self.particle_symbols()),
            INTERACTIONS_KEY => return Lookup::Interactions(self.interaction_names()),
            _ => {}
        }

        match self.index.get(key) {
            Some(Entry::Particle(i)) => Lookup::Particle(&self.particles[*i]),
            Some(Entry::Interaction(i)) => Lookup::Interaction(&self.interactions[*i]),
            None => {
                log::debug!("Catalog has no entry for {key:?}");
                Lookup::NotFound {
                    key: key.to_string(),
                    guidance: NOT_FOUND_GUIDANCE,
                }
            }
        }
    }
}
