use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use spaceweather_common::{PlanetDto, PlanetPayload, SatelliteDto, SatellitePayload};

/// Satellite owned by a planet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Satellite {
    /// Display id, may repeat across planets
    pub id: i64,
    pub name: String,
    pub weather: String,
}

impl Satellite {
    pub fn new(id: i64, name: impl Into<String>, weather: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            weather: weather.into(),
        }
    }

    pub fn to_dto(&self) -> SatelliteDto {
        SatelliteDto {
            id: self.id,
            name: self.name.clone(),
            weather: self.weather.clone(),
        }
    }
}

impl From<SatellitePayload> for Satellite {
    fn from(payload: SatellitePayload) -> Self {
        Self {
            id: payload.id,
            name: payload.name,
            weather: payload.weather,
        }
    }
}

/// Planet as held by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planet {
    /// Store-assigned, unique, never reused
    pub id: i64,
    pub name: String,
    /// Set once on insert
    pub created_date: DateTime<Utc>,
    pub is_active: bool,
    /// Insertion order is preserved
    pub satellites: Vec<Satellite>,
}

impl Planet {
    pub fn to_dto(&self) -> PlanetDto {
        PlanetDto {
            id: self.id,
            name: self.name.clone(),
            created_date: self.created_date,
            is_active: self.is_active,
            satellites: self.satellites.iter().map(Satellite::to_dto).collect(),
        }
    }
}

/// Client-controlled part of a planet, the only input the store accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanetCandidate {
    pub name: String,
    /// `None` means "not specified": false on insert, unchanged on replace
    pub is_active: Option<bool>,
    pub satellites: Vec<Satellite>,
}

impl PlanetCandidate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_active: None,
            satellites: Vec::new(),
        }
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn with_satellite(mut self, satellite: Satellite) -> Self {
        self.satellites.push(satellite);
        self
    }
}

impl From<PlanetPayload> for PlanetCandidate {
    /// Drops the client-supplied `id` and `createdDate`
    fn from(payload: PlanetPayload) -> Self {
        Self {
            name: payload.name,
            is_active: payload.is_active,
            satellites: payload.satellites.into_iter().map(Satellite::from).collect(),
        }
    }
}
