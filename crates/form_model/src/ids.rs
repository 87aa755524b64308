//! Opaque identifiers for templates, steps and elements
//!
//! Identifiers are plain strings handed out by an id provider. The model
//! never inspects their contents; it only compares them.

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an identifier produced by an id provider
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the identifier as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the identifier, returning the raw string
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Identifier of a template document
    TemplateId
);

string_id!(
    /// Identifier of a step within a template
    StepId
);

string_id!(
    /// Identifier of an element within a step
    ElementId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_serialize_as_bare_strings() {
        let id = StepId::new("step-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"step-1\"");

        let back: StepId = serde_json::from_str("\"step-1\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_display_matches_inner() {
        let id = ElementId::from("abc");
        assert_eq!(id.to_string(), "abc");
        assert_eq!(id.as_str(), "abc");
        assert_eq!(id.into_inner(), "abc".to_string());
    }
}
