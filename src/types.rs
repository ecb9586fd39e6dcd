//! Records exchanged with the pallet/pack backend.
//!
//! Responses are decoded leniently: numbers may arrive as JSON numbers or
//! numeric strings, flags as booleans or 0/1, and absent fields as null.
//! Request payloads are always strictly typed.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Server-assigned record identity
pub type RecordId = i64;

/// Anything listed with a stable id
pub trait Identified {
    fn id(&self) -> RecordId;
}

/// A pallet as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pallet {
    pub id: RecordId,
    #[serde(default, deserialize_with = "de_opt_string")]
    pub qr_code: Option<String>,
    #[serde(default, deserialize_with = "de_flag")]
    pub completed: bool,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub num_doca: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub seq_pallet: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub station: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_string")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string")]
    pub updated_at: Option<String>,
}

impl Identified for Pallet {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// A pack as returned by the backend. `seq_pallet == None` marks an orphan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pack {
    pub id: RecordId,
    #[serde(default, deserialize_with = "de_opt_string")]
    pub qr_code: Option<String>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub seq_pallet: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_i64")]
    pub orig: Option<i64>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    pub seq_pack: Option<f64>,
    #[serde(default, deserialize_with = "de_flag")]
    pub lastpack: bool,
    #[serde(default, deserialize_with = "de_opt_i64")]
    pub pospallet: Option<i64>,
    #[serde(default, deserialize_with = "de_opt_i64")]
    pub robot_num: Option<i64>,
}

impl Pack {
    pub fn is_orphan(&self) -> bool {
        self.seq_pallet.is_none()
    }
}

impl Identified for Pack {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// One row of the denormalized pack overview report.
///
/// Cells are kept as raw JSON values since the report view mixes text,
/// numbers and dates depending on the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverviewRow {
    #[serde(default)]
    pub fecha: Value,
    #[serde(default)]
    pub hora: Value,
    #[serde(default)]
    pub idea_ean: Value,
    #[serde(default)]
    pub origem_enfardadeira: Value,
    #[serde(default)]
    pub ot: Value,
    #[serde(default)]
    pub iden_robot: Value,
    #[serde(default)]
    pub iden_pallet: Value,
    #[serde(default)]
    pub palet_completo: Value,
    #[serde(default)]
    pub destino_muelle: Value,
}

impl OverviewRow {
    /// Completeness flag using JavaScript-style truthiness of the raw cell
    pub fn is_complete(&self) -> bool {
        is_truthy(&self.palet_completo)
    }
}

/// Body of `POST /api/pallets`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPallet {
    pub seq_pallet: f64,
}

/// Body of `PUT /api/pallets/{id}`: full replacement of the editable fields
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PalletUpdate {
    pub qr_code: Option<String>,
    pub completed: bool,
    pub num_doca: Option<f64>,
    pub seq_pallet: Option<f64>,
    pub station: Option<f64>,
}


/// Body of every pack create/update request
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PackPayload {
    pub qr_code: Option<String>,
    pub orig: Option<i64>,
    pub seq_pack: Option<f64>,
    pub lastpack: bool,
    pub pospallet: Option<i64>,
    pub robot_num: Option<i64>,
}


/// Truthiness of a raw JSON value, matching how the web console treated flags
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn value_to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|f| f.is_finite())
}

fn de_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_f64))
}

fn de_opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(|v| match v {
        Value::Number(n) if n.is_i64() => n.as_i64(),
        other => value_to_f64(other)
            .filter(|f| f.fract() == 0.0 && f.abs() < 9_007_199_254_740_992.0)
            .map(|f| f as i64),
    }))
}

fn de_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

fn de_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().is_some_and(is_truthy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pallet_decodes_sparse_record() {
        let pallet: Pallet = serde_json::from_value(json!({ "id": 7 })).unwrap();
        assert_eq!(pallet.id, 7);
        assert_eq!(pallet.qr_code, None);
        assert!(!pallet.completed);
        assert_eq!(pallet.seq_pallet, None);
    }

    #[test]
    fn test_pallet_decodes_loose_scalars() {
        let pallet: Pallet = serde_json::from_value(json!({
            "id": 3,
            "qr_code": "QR-3",
            "completed": 1,
            "num_doca": "12",
            "seq_pallet": "1728234567890",
            "station": 4.0,
            "created_at": "2024-10-06T12:00:00Z"
        }))
        .unwrap();

        assert!(pallet.completed);
        assert_eq!(pallet.num_doca, Some(12.0));
        assert_eq!(pallet.seq_pallet, Some(1_728_234_567_890.0));
        assert_eq!(pallet.station, Some(4.0));
    }

    #[test]
    fn test_pallet_numbers_keep_fractions() {
        let pallet: Pallet =
            serde_json::from_value(json!({ "id": 4, "num_doca": 2.5, "station": "1.25" })).unwrap();
        assert_eq!(pallet.num_doca, Some(2.5));
        assert_eq!(pallet.station, Some(1.25));
    }

    #[test]
    fn test_integer_field_rejects_fraction() {
        let pack: Pack = serde_json::from_value(json!({ "id": 1, "orig": 2.5 })).unwrap();
        assert_eq!(pack.orig, None);
    }

    #[test]
    fn test_pack_orphan_flag() {
        let orphan: Pack = serde_json::from_value(json!({ "id": 1, "seq_pallet": null })).unwrap();
        let owned: Pack = serde_json::from_value(json!({ "id": 2, "seq_pallet": 1000 })).unwrap();
        assert!(orphan.is_orphan());
        assert!(!owned.is_orphan());
    }

    #[test]
    fn test_pack_payload_serializes_nulls() {
        let payload = PackPayload {
            seq_pack: Some(3.5),
            lastpack: true,
            ..Default::default()
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "qr_code": null,
                "orig": null,
                "seq_pack": 3.5,
                "lastpack": true,
                "pospallet": null,
                "robot_num": null
            })
        );
    }

    #[test]
    fn test_overview_row_missing_cells_are_null() {
        let row: OverviewRow = serde_json::from_value(json!({ "ot": 55 })).unwrap();
        assert_eq!(row.ot, json!(55));
        assert!(row.fecha.is_null());
        assert!(!row.is_complete());
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&Value::Null));
        assert!(is_truthy(&json!("S")));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!(true)));
    }
}
