//! Arguments sent to the mailbox tool.

use serde::Serialize;

/// Query descriptor for "the most recent unread email".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnreadQuery {
    #[serde(rename = "instructions")]
    pub intent: String,
    #[serde(rename = "query")]
    pub filter: String,
}

impl Default for UnreadQuery {
    fn default() -> Self {
        UnreadQuery {
            intent: "find unread email".to_string(),
            filter: "is:unread".to_string(),
        }
    }
}

impl UnreadQuery {
    /// Tool-call arguments as a JSON object.
    pub fn to_arguments(&self) -> serde_json::Map<String, serde_json::Value> {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => serde_json::Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_targets_unread_mail() {
        let args = UnreadQuery::default().to_arguments();
        assert_eq!(args["instructions"], "find unread email");
        assert_eq!(args["query"], "is:unread");
        assert_eq!(args.len(), 2);
    }
}
