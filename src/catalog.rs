//! Hotel sources
//!
//! [`HotelSource`] is the seam between the dashboard and wherever hotel
//! data comes from. [`Catalog`] is the bundled implementation: a JSON
//! document mapping city codes to hotel lists, loaded from disk or taken
//! from the built-in demo data.

use anyhow::{Context, Result as AnyResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;
use std::thread;
use std::time::Duration;

use crate::error::{ExplorerError, Result};
use crate::types::{CityCode, Hotel};

/// Built-in demo catalog used when no catalog file is configured
const DEMO_CATALOG: &str = include_str!("../data/demo_catalog.json");

/// Something that can list hotels for a city
pub trait HotelSource: Send + Sync {
    fn fetch(&self, city: &CityCode) -> Result<Vec<Hotel>>;
}

/// Hotels grouped by city code
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub cities: BTreeMap<String, Vec<Hotel>>,
    /// Simulated lookup latency
    #[serde(skip)]
    delay: Duration,
}

impl Catalog {
    pub fn new(cities: BTreeMap<String, Vec<Hotel>>) -> Self {
        Self {
            cities,
            delay: Duration::ZERO,
        }
    }

    /// The catalog bundled with the binary
    pub fn demo() -> AnyResult<Self> {
        serde_json::from_str(DEMO_CATALOG).context("Failed to parse built-in demo catalog")
    }

    /// Load a catalog from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> AnyResult<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog from {:?}", path.as_ref()))?;

        let catalog: Self =
            serde_json::from_str(&content).context("Failed to parse catalog JSON")?;

        Ok(catalog)
    }

    /// Delay every fetch by `delay`, to make the loading state visible
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Check city keys and hotel ids.
    ///
    /// City keys must be three uppercase ASCII letters; hotel ids must be
    /// non-empty and unique within their city.
    pub fn validate(&self) -> AnyResult<()> {
        for (city, hotels) in &self.cities {
            if city.len() != 3 || !city.chars().all(|c| c.is_ascii_uppercase()) {
                anyhow::bail!("City key {:?} must be three uppercase letters", city);
            }

            let mut seen = HashSet::new();
            for hotel in hotels {
                if hotel.hotel_id.trim().is_empty() {
                    anyhow::bail!("Hotel {:?} in {} has an empty hotelId", hotel.name, city);
                }
                if !seen.insert(hotel.hotel_id.as_str()) {
                    anyhow::bail!("Duplicate hotelId {:?} in {}", hotel.hotel_id, city);
                }
            }
        }
        Ok(())
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    pub fn hotel_count(&self) -> usize {
        self.cities.values().map(Vec::len).sum()
    }
}

impl HotelSource for Catalog {
    fn fetch(&self, city: &CityCode) -> Result<Vec<Hotel>> {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        Ok(self.cities.get(city.as_str()).cloned().unwrap_or_default())
    }
}

/// A source that always fails; stands in for an unreachable backend
#[derive(Debug, Clone, Default)]
pub struct UnavailableSource {
    pub reason: String,
}

impl HotelSource for UnavailableSource {
    fn fetch(&self, city: &CityCode) -> Result<Vec<Hotel>> {
        Err(ExplorerError::provider(format!(
            "hotel lookup for {} failed: {}",
            city, self.reason
        )))
    }
}
