use crate::errors::LoadError;
use serde::{Deserialize, Serialize};

pub const UNKNOWN_ERROR: &str = "Nepoznata greška";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Summary {
    #[serde(default)]
    pub open: u64,
    #[serde(default)]
    pub closed: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StoreStatus {
    #[serde(default)]
    pub chain: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub open: bool,
    #[serde(default)]
    pub hours: String,
}

/// Payload of the backend `/api/check` endpoint. Failure payloads only carry
/// `success` and `error`, so every field has a default.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StatusResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    pub cached: bool,
    #[serde(default)]
    pub last_update: String,
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub summary: Summary,
    #[serde(default)]
    pub stores: Vec<StoreStatus>,
}

impl StatusResponse {
    pub fn into_result(self) -> Result<Self, LoadError> {
        if self.success {
            return Ok(self);
        }
        let message = self
            .error
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
        Err(LoadError::Application(message))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Preferences {
    #[serde(rename = "selectedUser", default, skip_serializing_if = "Option::is_none")]
    pub selected_user: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    pub user: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SelectionResponse {
    pub user: String,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_payload_uses_error_field() {
        let resp: StatusResponse =
            serde_json::from_str(r#"{"success": false, "error": "Upstream down"}"#).unwrap();
        assert_eq!(
            resp.into_result(),
            Err(LoadError::Application("Upstream down".into()))
        );
    }

    #[test]
    fn failure_without_error_falls_back() {
        let resp: StatusResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        let err = resp.into_result().unwrap_err();
        assert_eq!(err.to_string(), UNKNOWN_ERROR);
    }

    #[test]
    fn success_payload_parses_stores_in_order() {
        let resp: StatusResponse = serde_json::from_str(
            r#"{
                "success": true, "cached": true, "last_update": "08:15",
                "day": "Nedjelja", "date": "05.01.2025",
                "summary": {"open": 1, "closed": 1, "total": 2},
                "stores": [
                    {"chain": "SPAR", "name": "SPAR Gospodska", "open": true, "hours": "08:00 - 13:00"},
                    {"chain": "KONZUM", "name": "Konzum Bolnička", "open": false, "hours": "Zatvoreno"}
                ]
            }"#,
        )
        .unwrap();
        let resp = resp.into_result().unwrap();
        assert!(resp.cached);
        assert_eq!(resp.summary, Summary { open: 1, closed: 1 });
        assert_eq!(resp.stores[0].chain, "SPAR");
        assert_eq!(resp.stores[1].name, "Konzum Bolnička");
        assert!(!resp.stores[1].open);
    }

    #[test]
    fn preferences_use_selected_user_key() {
        let prefs = Preferences {
            selected_user: Some("ana".into()),
        };
        assert_eq!(
            serde_json::to_string(&prefs).unwrap(),
            r#"{"selectedUser":"ana"}"#
        );
    }
}
