use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public view of a satellite, always nested inside its planet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SatelliteDto {
    /// Display id, only meaningful within the parent planet
    pub id: i64,
    pub name: String,
    /// Free-form weather description, e.g. "Clear", "Acid Rain"
    pub weather: String,
}

/// Public view of a planet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetDto {
    pub id: i64,
    pub name: String,
    pub created_date: DateTime<Utc>,
    pub is_active: bool,
    pub satellites: Vec<SatelliteDto>,
}

/// Satellite as sent by a client on create/update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SatellitePayload {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub weather: String,
}

/// Planet body accepted by `POST /api/v1/planets` and `PUT /api/v1/planets/{id}`
///
/// `id` and `createdDate` are accepted so that a client can echo back a
/// previously fetched planet, but the server never uses them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    /// Left untouched on update when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub satellites: Vec<SatellitePayload>,
}

/// Query string of `GET /api/v1/planets`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub size: Option<i64>,
    /// Filter term: name substring, or the `active` / `inactive` shorthand
    #[serde(default)]
    pub status: Option<String>,
    /// `field[,order]`, e.g. `name,desc`
    #[serde(default)]
    pub sort: Option<String>,
}

/// Error body returned with every non-2xx response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}
