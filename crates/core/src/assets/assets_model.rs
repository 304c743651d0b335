//! Asset domain models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Operational importance tier of an asset, `A` being the highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Criticality {
    A,
    #[default]
    B,
    C,
}

impl Criticality {
    pub const ALL: [Criticality; 3] = [Criticality::A, Criticality::B, Criticality::C];

    pub fn as_str(&self) -> &'static str {
        match self {
            Criticality::A => "A",
            Criticality::B => "B",
            Criticality::C => "C",
        }
    }
}

impl fmt::Display for Criticality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Criticality {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "A" => Ok(Criticality::A),
            "B" => Ok(Criticality::B),
            "C" => Ok(Criticality::C),
            other => Err(ValidationError::InvalidEnumValue {
                field: "criticality",
                value: other.to_string(),
            }
            .into()),
        }
    }
}

/// Domain model representing a tracked piece of equipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub location: String,
    pub criticality: Criticality,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new asset.
///
/// `id` and the timestamps are assigned by the repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAsset {
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub criticality: Option<Criticality>,
}

impl NewAsset {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_criticality(mut self, criticality: Criticality) -> Self {
        self.criticality = Some(criticality);
        self
    }

    /// Applies defaults to unset fields: criticality falls back to `B`.
    pub fn normalize(&mut self) {
        if self.criticality.is_none() {
            self.criticality = Some(Criticality::default());
        }
    }

    /// Validates the new asset data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Asset name cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}
