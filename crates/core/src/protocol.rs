use crate::tool::ToolSpec;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Invocation IDs correlate a dispatcher request with its result
pub type InvocationId = Uuid;

/// Events the dispatcher sends to an agent process
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Inbound {
    /// Call a bound tool by name
    Invoke {
        id: InvocationId,
        name: String,
        #[serde(default)]
        arguments: Value,
    },

    /// Stop accepting invocations; in-flight ones still complete
    Shutdown,
}

/// Events an agent process sends to the dispatcher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Outbound {
    /// First event on every connection
    Connect {
        #[serde(skip_serializing_if = "Option::is_none")]
        jwt_token: Option<String>,
    },

    /// One per bound tool, sent after `Connect`
    Register { tool: ToolSpec },

    /// A tool returned a record. `fallback` marks placeholder content.
    Completed {
        id: InvocationId,
        name: String,
        fallback: bool,
        result: Value,
    },

    /// The invocation could not be run: unknown tool, bad arguments, panic
    Failed {
        id: InvocationId,
        name: String,
        error: String,
    },
}

impl Outbound {
    /// The invocation this event answers, if any.
    pub fn invocation_id(&self) -> Option<InvocationId> {
        match self {
            Outbound::Completed { id, .. } | Outbound::Failed { id, .. } => Some(*id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_invoke_wire_format() {
        let line = r#"{"type":"invoke","id":"00000000-0000-0000-0000-000000000000","name":"get_weather","arguments":{"city_name":"Oslo","date":"2025-06-01"}}"#;
        let event: Inbound = serde_json::from_str(line).unwrap();
        assert_eq!(
            event,
            Inbound::Invoke {
                id: Uuid::nil(),
                name: "get_weather".to_string(),
                arguments: json!({"city_name": "Oslo", "date": "2025-06-01"}),
            }
        );
    }

    #[test]
    fn test_invoke_without_arguments() {
        let line = r#"{"type":"invoke","id":"00000000-0000-0000-0000-000000000000","name":"get_current_date"}"#;
        let event: Inbound = serde_json::from_str(line).unwrap();
        assert!(matches!(event, Inbound::Invoke { arguments: Value::Null, .. }));
    }

    #[test]
    fn test_shutdown_wire_format() {
        let event: Inbound = serde_json::from_str(r#"{"type":"shutdown"}"#).unwrap();
        assert_eq!(event, Inbound::Shutdown);
    }

    #[test]
    fn test_completed_wire_format() {
        let event = Outbound::Completed {
            id: Uuid::nil(),
            name: "get_current_date".to_string(),
            fallback: false,
            result: json!("2025-06-01"),
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["type"], "completed");
        assert_eq!(value["fallback"], false);
        assert_eq!(event.invocation_id(), Some(Uuid::nil()));
    }

    #[test]
    fn test_connect_omits_missing_token() {
        let value = serde_json::to_value(Outbound::Connect { jwt_token: None }).unwrap();
        assert_eq!(value, json!({"type": "connect"}));
        assert_eq!(Outbound::Connect { jwt_token: None }.invocation_id(), None);
    }
}
