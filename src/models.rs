use serde::Serialize;
use serde_json::{Map, Number, Value};
use std::fmt;

pub const STATUS_OK: &str = "ok";
pub const STATUS_ALREADY: &str = "already";
pub const STATUS_LOGIN_REQUIRED: &str = "login_required";

/// Body sent to the check-in endpoint. Serializes to `{}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckinRequest {}

/// Lenient view over a check-in response body.
///
/// Nothing here is validated: a body that is not an object, a status that is
/// not a string, or a missing field all simply read as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckinResponse {
    pub status: Option<String>,
    pub points: Points,
    pub streak: Option<u64>,
    pub badges: Vec<String>,
}

impl CheckinResponse {
    pub fn from_value(value: &Value) -> Self {
        let empty = Map::new();
        let fields = value.as_object().unwrap_or(&empty);

        Self {
            status: fields
                .get("status")
                .and_then(Value::as_str)
                .map(str::to_owned),
            points: Points(fields.get("points").cloned()),
            streak: fields.get("streak").and_then(Value::as_u64),
            badges: fields
                .get("badges")
                .and_then(Value::as_array)
                .map(|items| {
                    items
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::to_owned)
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

/// Points as the server sent them, rendered into messages the way a browser
/// concatenates a value onto a string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Points(pub Option<Value>);

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            None => f.write_str("undefined"),
            Some(value) => write_script_text(f, value),
        }
    }
}

fn write_script_text(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
    match value {
        Value::Null => f.write_str("null"),
        Value::Bool(flag) => write!(f, "{flag}"),
        Value::Number(number) => write_number(f, number),
        Value::String(text) => f.write_str(text),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    f.write_str(",")?;
                }
                // null elements join as empty strings
                if !item.is_null() {
                    write_script_text(f, item)?;
                }
            }
            Ok(())
        }
        Value::Object(_) => f.write_str("[object Object]"),
    }
}

fn write_number(f: &mut fmt::Formatter<'_>, number: &Number) -> fmt::Result {
    if let Some(value) = number.as_i64() {
        return write!(f, "{value}");
    }
    if let Some(value) = number.as_u64() {
        return write!(f, "{value}");
    }
    let Some(value) = number.as_f64() else {
        return write!(f, "{number}");
    };

    if value == 0.0 {
        return f.write_str("0");
    }
    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return write!(f, "{value}");
    }

    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            write!(f, "{mantissa}e+{exponent}")
        }
        _ => f.write_str(&text),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CheckinOutcome {
    CheckedIn {
        points: Points,
        streak: Option<u64>,
        badges: Vec<String>,
    },
    AlreadyCheckedIn {
        points: Points,
        streak: Option<u64>,
    },
    LoginRequired,
    /// Unrecognized or missing status; no feedback is shown.
    Ignored { status: Option<String> },
}

impl CheckinOutcome {
    pub fn from_response(response: CheckinResponse) -> Self {
        match response.status.as_deref() {
            Some(STATUS_OK) => Self::CheckedIn {
                points: response.points,
                streak: response.streak,
                badges: response.badges,
            },
            Some(STATUS_ALREADY) => Self::AlreadyCheckedIn {
                points: response.points,
                streak: response.streak,
            },
            Some(STATUS_LOGIN_REQUIRED) => Self::LoginRequired,
            _ => Self::Ignored {
                status: response.status,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_to_empty_object() {
        let body = serde_json::to_string(&CheckinRequest::default()).unwrap();
        assert_eq!(body, "{}");
    }

    #[test]
    fn response_reads_reference_server_fields() {
        let response = CheckinResponse::from_value(&json!({
            "status": "ok",
            "points": 120,
            "streak": 7,
            "badges": ["Century Learner", "Weekly Streak"]
        }));

        assert_eq!(response.status.as_deref(), Some("ok"));
        assert_eq!(response.points.to_string(), "120");
        assert_eq!(response.streak, Some(7));
        assert_eq!(response.badges, vec!["Century Learner", "Weekly Streak"]);
    }

    #[test]
    fn non_object_body_reads_as_empty() {
        let response = CheckinResponse::from_value(&json!(["ok", 42]));
        assert_eq!(response, CheckinResponse::default());
    }

    #[test]
    fn non_string_status_is_absent() {
        let response = CheckinResponse::from_value(&json!({ "status": 1, "points": 3 }));
        assert_eq!(response.status, None);
        assert_eq!(
            CheckinOutcome::from_response(response),
            CheckinOutcome::Ignored { status: None }
        );
    }

    #[test]
    fn points_render_like_the_server_sent_them() {
        assert_eq!(Points(None).to_string(), "undefined");
        assert_eq!(Points(Some(json!(42))).to_string(), "42");
        assert_eq!(Points(Some(json!(10.5))).to_string(), "10.5");
        assert_eq!(Points(Some(json!("7"))).to_string(), "7");
        assert_eq!(Points(Some(Value::Null)).to_string(), "null");
    }

    #[test]
    fn whole_floats_render_without_fraction() {
        let body: Value = serde_json::from_str(r#"{"a":10.0,"b":1e3,"c":-2.50}"#).unwrap();
        assert_eq!(Points(body.get("a").cloned()).to_string(), "10");
        assert_eq!(Points(body.get("b").cloned()).to_string(), "1000");
        assert_eq!(Points(body.get("c").cloned()).to_string(), "-2.5");
        assert_eq!(Points(Some(json!(-0.0))).to_string(), "0");
    }

    #[test]
    fn extreme_floats_use_exponent_form() {
        assert_eq!(Points(Some(json!(1e21))).to_string(), "1e+21");
        assert_eq!(Points(Some(json!(1.5e-7))).to_string(), "1.5e-7");
        assert_eq!(Points(Some(json!(0.000001))).to_string(), "0.000001");
    }

    #[test]
    fn non_numeric_points_render_like_string_concatenation() {
        assert_eq!(Points(Some(json!(true))).to_string(), "true");
        assert_eq!(Points(Some(json!([1, 2]))).to_string(), "1,2");
        assert_eq!(Points(Some(json!([1, null, [2, "x"]]))).to_string(), "1,,2,x");
        assert_eq!(Points(Some(json!({ "n": 1 }))).to_string(), "[object Object]");
    }

    #[test]
    fn outcome_matches_status() {
        let ok = CheckinResponse::from_value(&json!({ "status": "ok", "points": 42 }));
        assert!(matches!(
            CheckinOutcome::from_response(ok),
            CheckinOutcome::CheckedIn { .. }
        ));

        let already = CheckinResponse::from_value(&json!({ "status": "already", "points": 10 }));
        assert!(matches!(
            CheckinOutcome::from_response(already),
            CheckinOutcome::AlreadyCheckedIn { .. }
        ));

        let login = CheckinResponse::from_value(&json!({ "status": "login_required" }));
        assert_eq!(
            CheckinOutcome::from_response(login),
            CheckinOutcome::LoginRequired
        );

        let unknown = CheckinResponse::from_value(&json!({ "status": "unknown" }));
        assert_eq!(
            CheckinOutcome::from_response(unknown),
            CheckinOutcome::Ignored {
                status: Some("unknown".to_string())
            }
        );
    }
}
