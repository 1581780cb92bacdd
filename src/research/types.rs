//! Research response data structures

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::utils::constants::RESULT_COUNT;
use crate::utils::errors::ResearchError;

/// One ranked research record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchResult {
    pub title: String,
    pub snippet: String,
    pub link: String,
    pub display_link: String,
    /// 1-based rank
    pub position: u32,
}

/// The `"direct": true` flag; any other value is rejected on parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectFlag;

impl Serialize for DirectFlag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(true)
    }
}

impl<'de> Deserialize<'de> for DirectFlag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if bool::deserialize(deserializer)? {
            Ok(DirectFlag)
        } else {
            Err(de::Error::custom("`direct` must be true"))
        }
    }
}

/// Either a full direct result set or a captured fault, never both
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResearchOutcome {
    Direct {
        results: Vec<ResearchResult>,
        direct: DirectFlag,
    },
    Failed {
        error: String,
        results: Vec<ResearchResult>,
    },
}

/// Envelope returned for every research call
///
/// Only the responder builds one; parsed envelopes are checked so that a
/// direct response holds exactly [`RESULT_COUNT`] records and a failed one
/// holds none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawResponse")]
pub struct ResearchResponse {
    pub query: String,
    pub session_id: Option<String>,
    #[serde(flatten)]
    outcome: ResearchOutcome,
}

#[derive(Deserialize)]
struct RawResponse {
    query: String,
    session_id: Option<String>,
    #[serde(flatten)]
    outcome: ResearchOutcome,
}

impl TryFrom<RawResponse> for ResearchResponse {
    type Error = String;

    fn try_from(raw: RawResponse) -> Result<Self, Self::Error> {
        match &raw.outcome {
            ResearchOutcome::Direct { results, .. } if results.len() != RESULT_COUNT => {
                return Err(format!(
                    "direct response must hold {RESULT_COUNT} results, found {}",
                    results.len()
                ));
            }
            ResearchOutcome::Failed { results, .. } if !results.is_empty() => {
                return Err("failed response must not hold results".to_string());
            }
            _ => {}
        }

        Ok(Self {
            query: raw.query,
            session_id: raw.session_id,
            outcome: raw.outcome,
        })
    }
}

impl ResearchResponse {
    pub(crate) fn direct(
        query: String,
        session_id: Option<String>,
        results: Vec<ResearchResult>,
    ) -> Self {
        Self {
            query,
            session_id,
            outcome: ResearchOutcome::Direct {
                results,
                direct: DirectFlag,
            },
        }
    }

    pub(crate) fn failed(query: String, session_id: Option<String>, error: String) -> Self {
        Self {
            query,
            session_id,
            outcome: ResearchOutcome::Failed {
                error,
                results: Vec::new(),
            },
        }
    }

    pub fn outcome(&self) -> &ResearchOutcome {
        &self.outcome
    }

    pub fn is_direct(&self) -> bool {
        matches!(self.outcome, ResearchOutcome::Direct { .. })
    }

    pub fn results(&self) -> &[ResearchResult] {
        match &self.outcome {
            ResearchOutcome::Direct { results, .. } | ResearchOutcome::Failed { results, .. } => {
                results
            }
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            ResearchOutcome::Failed { error, .. } => Some(error),
            ResearchOutcome::Direct { .. } => None,
        }
    }

    /// Serialize with 2-space indentation, no trailing newline
    pub fn to_json_pretty(&self) -> Result<String, ResearchError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn record(position: u32) -> ResearchResult {
        ResearchResult {
            title: format!("title {position}"),
            snippet: "snippet".to_string(),
            link: format!("https://example.com/result{position}"),
            display_link: format!("example.com/result{position}"),
            position,
        }
    }

    fn three() -> Vec<ResearchResult> {
        vec![record(1), record(2), record(3)]
    }

    #[test]
    fn direct_keys_in_order() {
        let response = ResearchResponse::direct("q".into(), None, three());
        let json = response.to_json_pretty().unwrap();
        let q = json.find("\"query\"").unwrap();
        let s = json.find("\"session_id\"").unwrap();
        let r = json.find("\"results\"").unwrap();
        let d = json.find("\"direct\"").unwrap();
        assert!(q < s && s < r && r < d);
        assert!(!json.contains("\"error\""));
    }

    #[test]
    fn failed_keys_in_order() {
        let response = ResearchResponse::failed("q".into(), Some("s".into()), "boom".into());
        let json = response.to_json_pretty().unwrap();
        let s = json.find("\"session_id\"").unwrap();
        let e = json.find("\"error\"").unwrap();
        let r = json.find("\"results\"").unwrap();
        assert!(s < e && e < r);
        assert!(!json.contains("\"direct\""));
        assert!(json.contains("\"results\": []"));
    }

    #[test]
    fn absent_session_serializes_as_null() {
        let response = ResearchResponse::direct("q".into(), None, three());
        let value: Value = serde_json::from_str(&response.to_json_pretty().unwrap()).unwrap();
        assert_eq!(value["session_id"], Value::Null);
        assert_eq!(value["direct"], Value::Bool(true));
    }

    #[test]
    fn record_keys_in_order() {
        let json = serde_json::to_string(&record(2)).unwrap();
        assert_eq!(
            json,
            r#"{"title":"title 2","snippet":"snippet","link":"https://example.com/result2","display_link":"example.com/result2","position":2}"#
        );
    }

    #[test]
    fn both_outcomes_parse_back() {
        let ok = ResearchResponse::direct("q".into(), Some("s".into()), three());
        let parsed: ResearchResponse =
            serde_json::from_str(&ok.to_json_pretty().unwrap()).unwrap();
        assert_eq!(parsed, ok);

        let failed = ResearchResponse::failed("q".into(), None, "boom".into());
        let parsed: ResearchResponse =
            serde_json::from_str(&failed.to_json_pretty().unwrap()).unwrap();
        assert_eq!(parsed, failed);
        assert_eq!(parsed.error(), Some("boom"));
        assert!(!parsed.is_direct());
        assert!(parsed.results().is_empty());
    }

    #[test]
    fn indentation_is_two_spaces() {
        let response = ResearchResponse::direct("q".into(), None, three());
        let json = response.to_json_pretty().unwrap();
        assert!(json.starts_with("{\n  \"query\": \"q\",\n  \"session_id\": null,"));
        assert!(!json.ends_with('\n'));
    }

    #[test]
    fn direct_flag_false_is_rejected() {
        let mut value = serde_json::to_value(ResearchResponse::direct("q".into(), None, three()))
            .unwrap();
        value["direct"] = Value::Bool(false);
        assert!(serde_json::from_value::<ResearchResponse>(value).is_err());

        let empty = r#"{"query":"q","session_id":null,"results":[],"direct":false}"#;
        assert!(serde_json::from_str::<ResearchResponse>(empty).is_err());
    }

    #[test]
    fn partial_direct_result_set_is_rejected() {
        let empty_direct = r#"{"query":"q","session_id":null,"results":[],"direct":true}"#;
        let err = serde_json::from_str::<ResearchResponse>(empty_direct).unwrap_err();
        assert!(err.to_string().contains("must hold 3 results"));
    }

    #[test]
    fn failed_response_with_results_is_rejected() {
        let mut value = serde_json::to_value(ResearchResponse::failed("q".into(), None, "boom".into()))
            .unwrap();
        value["results"] = serde_json::to_value(three()).unwrap();
        assert!(serde_json::from_value::<ResearchResponse>(value).is_err());
    }

    #[test]
    fn envelope_without_outcome_is_rejected() {
        let bare = r#"{"query":"q","session_id":null,"results":[]}"#;
        assert!(serde_json::from_str::<ResearchResponse>(bare).is_err());
    }
}
