//! Core domain types for the hotel explorer
//!
//! City codes are validated newtypes so that only well-formed codes ever
//! reach a hotel source. Hotels keep the camelCase field names used by the
//! hotel list APIs they are read from.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumIter, EnumString};

use crate::error::{ExplorerError, Result};

/// Required length of a city code
pub const CITY_CODE_LEN: usize = 3;

/// Message shown when a submitted city code has the wrong length
pub const CITY_CODE_HINT: &str = "Enter 3-letter city code";

/// A 3-character, uppercase city code (e.g. `NYC`, `LON`, `AMS`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CityCode(String);

impl CityCode {
    /// Normalize and validate a raw city code.
    ///
    /// Surrounding whitespace is trimmed and the code is uppercased; the
    /// result must be exactly [`CITY_CODE_LEN`] characters long.
    pub fn parse(raw: &str) -> Result<Self> {
        let normalized = raw.trim().to_uppercase();
        if normalized.chars().count() != CITY_CODE_LEN {
            return Err(ExplorerError::validation(CITY_CODE_HINT));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for CityCode {
    type Err = ExplorerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl<'de> Deserialize<'de> for CityCode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// A hotel record as returned by a hotel source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    /// Unique identifier, stable across a result set
    pub hotel_id: String,
    pub name: String,
    /// Location label, if the source provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iata_code: Option<String>,
}

impl Hotel {
    pub fn new(hotel_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            hotel_id: hotel_id.into(),
            name: name.into(),
            iata_code: None,
        }
    }

    pub fn with_iata_code(mut self, code: impl Into<String>) -> Self {
        self.iata_code = Some(code.into());
        self
    }

    /// Location label for display, falling back to the searched city
    pub fn location<'a>(&'a self, searched: &'a str) -> &'a str {
        self.iata_code
            .as_deref()
            .filter(|code| !code.is_empty())
            .unwrap_or(searched)
    }
}

/// Application routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum Route {
    #[default]
    #[strum(serialize = "/dashboard")]
    #[serde(rename = "/dashboard")]
    Dashboard,
    #[strum(serialize = "/login")]
    #[serde(rename = "/login")]
    Login,
}
