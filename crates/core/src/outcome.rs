use serde::{Deserialize, Serialize};

/// Whether a handler's value came from a live provider or from the fixed
/// placeholder content used when credentials are missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "snake_case")]
pub enum Outcome<T> {
    Live(T),
    Fallback(T),
}

impl<T> Outcome<T> {
    pub fn is_live(&self) -> bool {
        matches!(self, Outcome::Live(_))
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Outcome::Fallback(_))
    }

    pub fn value(&self) -> &T {
        match self {
            Outcome::Live(value) | Outcome::Fallback(value) => value,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Outcome::Live(value) | Outcome::Fallback(value) => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flags() {
        assert!(Outcome::Live(1).is_live());
        assert!(!Outcome::Live(1).is_fallback());
        assert!(Outcome::Fallback(1).is_fallback());
    }

    #[test]
    fn test_value_accessors() {
        let outcome = Outcome::Fallback("placeholder");
        assert_eq!(*outcome.value(), "placeholder");
        assert_eq!(outcome.into_inner(), "placeholder");
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(Outcome::Live(json!({"a": 1}))).unwrap();
        assert_eq!(value, json!({"mode": "live", "value": {"a": 1}}));
    }
}
