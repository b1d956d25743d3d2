//! Wire DTOs for the backend REST API.
//!
//! DESIGN
//! ======
//! The backend wraps many answers in one or two `data` envelopes and is
//! loose with numeric types (prices arrive as numbers or numeric strings),
//! so decoding is deliberately tolerant: envelope peeling is centralized
//! in `extract_list`/`extract_object`, and lenient field deserializers
//! keep the structs strict to use but forgiving to parse.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Account role as assigned by the backend.
///
/// A closed set: unknown role strings fail to decode, and callers treat
/// that as "not authenticated" rather than guessing at privileges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Admin,
}

impl Role {
    /// Whether this role grants access to the admin screens.
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// The authenticated account as returned by `/api/me` and `/api/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Principal {
    /// Backend-issued account identifier.
    #[serde(deserialize_with = "deserialize_i64_lenient")]
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Contact phone, when the account has one.
    #[serde(default)]
    pub phone: Option<String>,
    /// Privilege level.
    pub role: Role,
}

/// A palette tag attached to a product.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteTag {
    pub palette_name: String,
}

/// A catalog product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "deserialize_i64_lenient")]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category: String,
    /// Unit price in rupiah. The backend emits numbers or numeric strings.
    #[serde(default, deserialize_with = "deserialize_f64_lenient")]
    pub price: f64,
    #[serde(default, deserialize_with = "deserialize_i64_lenient")]
    pub stock: i64,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Primary palette, kept for products tagged before multi-palette
    /// support.
    #[serde(default)]
    pub palette_category: String,
    /// All palette tags; may be empty on older products.
    #[serde(default)]
    pub palettes: Vec<PaletteTag>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Product {
    /// Palette names for display: the tags when present, else the primary
    /// palette category.
    pub fn palette_names(&self) -> Vec<String> {
        if self.palettes.is_empty() {
            if self.palette_category.is_empty() {
                Vec::new()
            } else {
                vec![self.palette_category.clone()]
            }
        } else {
            self.palettes
                .iter()
                .map(|tag| tag.palette_name.clone())
                .collect()
        }
    }
}

/// Aggregate counters sent alongside the admin product list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductStats {
    #[serde(default, deserialize_with = "deserialize_i64_lenient")]
    pub total_products: i64,
    #[serde(default, deserialize_with = "deserialize_i64_lenient")]
    pub total_stock: i64,
    #[serde(default, deserialize_with = "deserialize_i64_lenient")]
    pub total_categories: i64,
    #[serde(default, deserialize_with = "deserialize_i64_lenient")]
    pub total_palettes: i64,
}

/// Answer of the image upload endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
}

impl UploadedImage {
    /// The effective stored location: `url` when present, else `path`.
    pub fn location(&self) -> Option<&str> {
        self.url.as_deref().or(self.path.as_deref())
    }
}

/// Result of a colour analysis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    /// Assigned seasonal palette, e.g. `"winter clear"`.
    pub palette_name: String,
    /// Hex colour swatches for the palette.
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub undertone: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
    /// Product picks returned inline by the analysis endpoint, when any.
    #[serde(default)]
    pub recommendations: Vec<Product>,
}

/// One entry of the signed-in account's analysis history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(deserialize_with = "deserialize_i64_lenient")]
    pub id: i64,
    /// Assigned palette. The backend spells this field both ways.
    #[serde(alias = "result_palette")]
    pub palette_name: String,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub undertone: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Embedded account reference on admin rows.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    #[serde(default, deserialize_with = "deserialize_i64_lenient")]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// One analysis row in the admin report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminAnalysis {
    #[serde(deserialize_with = "deserialize_i64_lenient")]
    pub id: i64,
    #[serde(default, deserialize_with = "deserialize_i64_lenient")]
    pub user_id: i64,
    /// Assigned palette for this analysis.
    pub result_palette: String,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub user: Option<UserRef>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// One row of the recent-activity feed on the admin dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentAnalysis {
    #[serde(deserialize_with = "deserialize_i64_lenient")]
    pub id: i64,
    #[serde(default)]
    pub user: Option<UserRef>,
    pub result_palette: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Aggregate usage counters for the admin dashboard.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminStatistics {
    #[serde(default, deserialize_with = "deserialize_i64_lenient")]
    pub total_users: i64,
    #[serde(default, deserialize_with = "deserialize_i64_lenient")]
    pub total_admins: i64,
    #[serde(default, deserialize_with = "deserialize_i64_lenient")]
    pub total_products: i64,
    #[serde(default, deserialize_with = "deserialize_i64_lenient")]
    pub total_analyses: i64,
    #[serde(default)]
    pub products_by_palette: BTreeMap<String, i64>,
    #[serde(default)]
    pub analyses_by_palette: BTreeMap<String, i64>,
    #[serde(default)]
    pub recent_analyses: Vec<RecentAnalysis>,
}

/// The editable profile as served by `GET /api/profile`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: String,
}

// ============================================================
// Envelope peeling
// ============================================================

/// Strips any number of `data` envelopes: list endpoints answer `[..]`,
/// `{"data": [..]}` or `{"data": {"data": [..], "total": n}}` depending on
/// pagination.
pub fn peel_data(value: Value) -> Value {
    let mut current = value;
    loop {
        match current {
            Value::Object(mut map) if map.contains_key("data") => {
                current = map.remove("data").unwrap_or(Value::Null);
            }
            other => return other,
        }
    }
}

/// Decodes a list answer, peeling `data` envelopes first.
///
/// # Errors
///
/// Describes the failure when no list is found or an element does not
/// decode.
pub fn extract_list<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, String> {
    match peel_data(value) {
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(|error| error.to_string()))
            .collect(),
        other => Err(format!("expected a list, got {}", json_kind(&other))),
    }
}

/// Decodes an object answer, peeling `data` envelopes first.
///
/// # Errors
///
/// Describes the failure when the payload does not decode into `T`.
pub fn extract_object<T: DeserializeOwned>(value: Value) -> Result<T, String> {
    serde_json::from_value(peel_data(value)).map_err(|error| error.to_string())
}

/// Decodes the account object from `/api/me` and `/api/login` answers,
/// which wrap it as `{"user": {..}}` or send it bare.
///
/// # Errors
///
/// Describes the failure when no account object decodes.
pub fn extract_principal(value: Value) -> Result<Principal, String> {
    let candidate = match peel_data(value) {
        Value::Object(mut map) if map.contains_key("user") => {
            map.remove("user").unwrap_or(Value::Null)
        }
        other => other,
    };
    serde_json::from_value(candidate).map_err(|error| error.to_string())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

// ============================================================
// Lenient field deserializers
// ============================================================

fn deserialize_i64_lenient<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected an integer-compatible number"))
        }
        Value::String(raw) => raw
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("expected an integer, got {raw:?}"))),
        Value::Null => Ok(0),
        other => Err(D::Error::custom(format!(
            "expected an integer, got {}",
            json_kind(&other)
        ))),
    }
}

fn deserialize_f64_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| D::Error::custom("expected a finite number")),
        Value::String(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("expected a numeric string, got {raw:?}"))),
        Value::Null => Ok(0.0),
        other => Err(D::Error::custom(format!(
            "expected a number, got {}",
            json_kind(&other)
        ))),
    }
}
