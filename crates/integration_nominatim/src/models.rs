//! Nominatim response models

use serde::{Deserialize, Deserializer, Serialize};

/// One place match from `/search` or `/reverse`
///
/// `lat`/`lon` stay string-encoded as Nominatim sends them. Entries whose
/// position is missing or not a string/number deserialize to an empty string
/// instead of failing the whole response, so callers can drop them one by one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NominatimPlace {
    #[serde(default)]
    pub place_id: Option<u64>,

    #[serde(default)]
    pub display_name: String,

    #[serde(default, deserialize_with = "lenient_decimal")]
    pub lat: String,

    #[serde(default, deserialize_with = "lenient_decimal")]
    pub lon: String,

    /// Provider relevance score; results arrive already ranked by it
    #[serde(default)]
    pub importance: Option<f64>,

    /// Present when `addressdetails=1` was requested
    #[serde(default)]
    pub address: Option<NominatimAddress>,
}

/// Structured address breakdown (`addressdetails=1`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NominatimAddress {
    #[serde(default)]
    pub road: Option<String>,
    #[serde(default)]
    pub suburb: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub town: Option<String>,
    #[serde(default)]
    pub village: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
}

impl NominatimAddress {
    /// City, falling back to town then village
    #[must_use]
    pub fn settlement(&self) -> Option<&str> {
        self.city
            .as_deref()
            .or(self.town.as_deref())
            .or(self.village.as_deref())
    }
}

/// Accept `"51.5"`, `51.5`, or anything else (mapped to an empty string)
fn lenient_decimal<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// Body of a failed `/reverse` lookup: `{"error": "Unable to geocode"}`
#[derive(Debug, Deserialize)]
pub(crate) struct NominatimErrorBody {
    pub error: String,
}
