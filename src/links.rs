//! Hyperlink navigation
//!
//! Response entities carry a map from relation name to [`Link`]. The map is
//! fixed when the response is decoded and never mutated afterward. Relation
//! names are opaque, case-sensitive, exact-match keys.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One navigable relation: a target address and, optionally, the HTTP method
/// to use when following it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            method: None,
        }
    }
}

/// A response entity that exposes hyperlinks to related resources.
pub trait LinkBased {
    /// The full relation map, as a read-only view.
    fn links(&self) -> &HashMap<String, Link>;

    /// Resolve a named relation.
    ///
    /// An unknown relation is an explicit absence, never an error and never a
    /// synthesized default. Callers that need the relation to exist raise
    /// their own error on `None`.
    fn link(&self, rel: &str) -> Option<&Link> {
        self.links().get(rel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubEntity {
        links: HashMap<String, Link>,
    }

    impl StubEntity {
        fn new(rel: &str, link: Link) -> Self {
            let mut links = HashMap::new();
            links.insert(rel.to_string(), link);
            Self { links }
        }
    }

    impl LinkBased for StubEntity {
        fn links(&self) -> &HashMap<String, Link> {
            &self.links
        }
    }

    #[test]
    fn known_relation_resolves() {
        let entity = StubEntity::new("self", Link::new("https://api.example.com/v3/apps/a1"));
        assert_eq!(
            entity.link("self").map(|l| l.href.as_str()),
            Some("https://api.example.com/v3/apps/a1")
        );
    }

    #[test]
    fn unknown_relation_is_absent() {
        let entity = StubEntity::new("self", Link::new("https://api.example.com/v3/apps/a1"));
        assert!(entity.link("space").is_none());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let entity = StubEntity::new("Self", Link::new("https://api.example.com/v3/apps/a1"));
        assert!(entity.link("self").is_none());
        assert!(entity.link("Self").is_some());
    }

    #[test]
    fn mutating_a_copy_does_not_affect_lookups() {
        let entity = StubEntity::new("self", Link::new("https://api.example.com/v3/apps/a1"));

        let mut copy = entity.links().clone();
        copy.insert("space".to_string(), Link::new("https://api.example.com/v3/spaces/s1"));
        copy.remove("self");

        assert_eq!(entity.links().len(), 1);
        assert!(entity.link("self").is_some());
        assert!(entity.link("space").is_none());
    }

    #[test]
    fn link_decodes_with_optional_method() {
        let link: Link = serde_json::from_str(r#"{"href":"/v3/apps/a1/actions/start","method":"POST"}"#)
            .expect("link should decode");
        assert_eq!(link.method.as_deref(), Some("POST"));

        let bare: Link = serde_json::from_str(r#"{"href":"/v3/apps/a1"}"#).expect("link should decode");
        assert!(bare.method.is_none());
    }
}
