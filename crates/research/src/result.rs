use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How a room lookup ended. Serialized under the `status` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum ResearchOutcome {
    #[serde(rename = "ok")]
    Ok { data: Value },
    #[serde(rename = "unreachable")]
    Unreachable { reason: String },
    #[serde(rename = "invalid-json")]
    InvalidResponse { reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchResult {
    pub room: String,
    pub source: String,
    #[serde(flatten)]
    pub outcome: ResearchOutcome,
}

impl ResearchResult {
    pub fn new(room: &str, source: String, outcome: ResearchOutcome) -> Self {
        Self {
            room: room.to_string(),
            source,
            outcome,
        }
    }

    pub fn status(&self) -> &'static str {
        match self.outcome {
            ResearchOutcome::Ok { .. } => "ok",
            ResearchOutcome::Unreachable { .. } => "unreachable",
            ResearchOutcome::InvalidResponse { .. } => "invalid-json",
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self.outcome, ResearchOutcome::Ok { .. })
    }

    pub fn data(&self) -> Option<&Value> {
        match &self.outcome {
            ResearchOutcome::Ok { data } => Some(data),
            _ => None,
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match &self.outcome {
            ResearchOutcome::Unreachable { reason } | ResearchOutcome::InvalidResponse { reason } => {
                Some(reason.as_str())
            }
            ResearchOutcome::Ok { .. } => None,
        }
    }
}
