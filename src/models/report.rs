use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use crate::error::AppError;

/// One vehicle movement event as stored.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VehicleReport {
    pub id: i64,
    pub city: String,
    pub sr_no: Option<i64>,
    pub vrn: Option<String>,
    pub model: Option<String>,
    pub entry_date: Option<String>,
    pub in_time: Option<String>,
    pub out_date: Option<String>,
    pub out_time: Option<String>,
    pub remarks: Option<String>,
}

/// Incoming report record. Only `city` is required; everything else is
/// stored verbatim. `sr_no` stays a raw JSON value because the form sends
/// it as a number, a numeric string, or an empty string.
#[derive(Debug, Clone, Deserialize)]
pub struct NewReport {
    pub city: String,
    #[serde(default)]
    pub sr_no: Value,
    #[serde(default)]
    pub vrn: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub entry_date: Option<String>,
    #[serde(default)]
    pub in_time: Option<String>,
    #[serde(default)]
    pub out_date: Option<String>,
    #[serde(default)]
    pub out_time: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
}

impl NewReport {
    /// Null, empty strings and zero all mean "no serial number".
    pub fn serial_number(&self) -> Result<Option<i64>, AppError> {
        match &self.sr_no {
            Value::Null => Ok(None),
            Value::Number(n) => {
                let value = n
                    .as_i64()
                    .or_else(|| n.as_f64().map(|f| f as i64))
                    .ok_or_else(|| AppError::BadRequest(format!("invalid sr_no: {n}")))?;
                Ok(if value == 0 { None } else { Some(value) })
            }
            Value::String(s) if s.trim().is_empty() => Ok(None),
            Value::String(s) => s
                .trim()
                .parse::<i64>()
                .map(Some)
                .map_err(|_| AppError::BadRequest(format!("invalid sr_no: {s:?}"))),
            other => Err(AppError::BadRequest(format!("invalid sr_no: {other}"))),
        }
    }
}
