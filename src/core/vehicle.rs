//! # Vehicle Records
//!
//! One entry of the dealership inventory as served by `cars.json`.
//!
//! Every attribute except `id` is optional. Decoding is lenient: a numeric
//! field that holds something other than a JSON number is treated as absent,
//! and so is a string field holding a non-string or an empty string. Only
//! a missing or unusable `id` rejects the record.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Stable identity of a vehicle within one inventory snapshot.
///
/// Feeds use either numeric or string ids, so both are accepted as-is.
/// Numbers keep their JSON form: `1.0` and ids beyond `i64` stay valid, and
/// `1` and `1.0` are distinct ids.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum VehicleId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleId::Number(n) => write!(f, "{n}"),
            VehicleId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for VehicleId {
    fn from(value: i64) -> Self {
        VehicleId::Number(value.into())
    }
}

impl From<&str> for VehicleId {
    fn from(value: &str) -> Self {
        VehicleId::Text(value.to_string())
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct VehicleRecord {
    pub id: VehicleId,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub year: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub km: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub power: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub doors: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub fuel: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub gearbox: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub engine: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub color: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub consumption: Option<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub highlights: Vec<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub features: Vec<String>,
}

impl VehicleRecord {
    /// A record with only identity and title set.
    pub fn new(id: impl Into<VehicleId>, title: &str) -> Self {
        Self {
            id: id.into(),
            title: Some(title.to_string()),
            price: None,
            year: None,
            km: None,
            power: None,
            doors: None,
            fuel: None,
            gearbox: None,
            engine: None,
            color: None,
            location: None,
            consumption: None,
            images: Vec::new(),
            highlights: Vec::new(),
            features: Vec::new(),
        }
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// The first image is the cover.
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Every image after the cover, in feed order.
    pub fn gallery(&self) -> &[String] {
        self.images.get(1..).unwrap_or_default()
    }
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        _ => None,
    })
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    })
}

fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}
