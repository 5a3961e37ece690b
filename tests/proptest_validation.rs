//! Property-based tests using proptest
//!
//! These tests verify the validator's counting/ordering guarantees and the
//! exact-match semantics of link lookup under randomized inputs.

use nimbus_client::applications::{CreateApplicationRequest, ListApplicationsRequest};
use nimbus_client::organizations::GetOrganizationRequest;
use nimbus_client::{Link, LinkBased, Validate};
use proptest::prelude::*;
use std::collections::HashMap;

/// Generate a value for a mandatory field: present (non-blank) or missing
fn arb_field(present: bool) -> impl Strategy<Value = String> {
    if present {
        "[a-z][a-z0-9-]{0,20}".boxed()
    } else {
        prop_oneof![Just(String::new()), Just("   ".to_string())].boxed()
    }
}

/// Minimal link-bearing entity, mirroring what response types do
struct StubEntity {
    links: HashMap<String, Link>,
}

impl LinkBased for StubEntity {
    fn links(&self) -> &HashMap<String, Link> {
        &self.links
    }
}

proptest! {
    /// A request missing k mandatory fields yields exactly k violations,
    /// in field-declaration order, on every call
    #[test]
    fn violation_count_matches_missing_fields(
        name_present in any::<bool>(),
        space_present in any::<bool>(),
        name in "[a-z][a-z0-9-]{0,20}",
        space in "[a-z0-9-]{1,20}",
    ) {
        let request = CreateApplicationRequest {
            name: if name_present { name } else { String::new() },
            space_id: if space_present { space } else { "  ".to_string() },
            ..CreateApplicationRequest::default()
        };

        let violations = request.validate();
        let missing = usize::from(!name_present) + usize::from(!space_present);
        prop_assert_eq!(violations.len(), missing);

        if !name_present {
            prop_assert_eq!(violations[0].as_str(), "name must be specified");
        }
        if !space_present {
            prop_assert_eq!(violations.last().unwrap().as_str(), "space id must be specified");
        }

        // Pure and idempotent: same input, same violations, same order
        prop_assert_eq!(request.validate(), violations);
    }

    /// Any non-blank id validates cleanly
    #[test]
    fn populated_mandatory_field_never_violates(id in "[a-zA-Z0-9][a-zA-Z0-9-]{0,30}") {
        let request = GetOrganizationRequest::new(id);
        prop_assert!(request.validate().is_empty());
    }

    /// A blank id always yields exactly one violation naming the field
    #[test]
    fn blank_mandatory_field_always_violates(blank in arb_field(false)) {
        let request = GetOrganizationRequest::new(blank);
        prop_assert_eq!(request.validate(), vec!["id must be specified".to_string()]);
    }

    /// Every inserted relation resolves; any other key is absent
    #[test]
    fn link_lookup_is_exact_match(
        links in prop::collection::hash_map("[a-z_]{1,10}", "[a-z0-9/_-]{1,30}", 0..8),
        probe in "[A-Z]{1,10}",
    ) {
        let entity = StubEntity {
            links: links
                .iter()
                .map(|(rel, href)| (rel.clone(), Link::new(href.clone())))
                .collect(),
        };

        for (rel, href) in &links {
            let resolved = entity.link(rel);
            prop_assert_eq!(resolved.map(|l| l.href.as_str()), Some(href.as_str()));
        }

        // Uppercase probes can never collide with the lowercase relation set
        prop_assert!(entity.link(&probe).is_none());
        prop_assert_eq!(entity.links().len(), links.len());
    }

    /// Optional list filters never produce violations, whatever their shape
    #[test]
    fn list_requests_are_always_valid(
        names in prop::collection::vec("[a-z-]{1,12}", 0..5),
        page in prop::option::of(1u32..100),
    ) {
        let mut request = ListApplicationsRequest::default();
        for name in names {
            request = request.name(name);
        }
        if let Some(page) = page {
            request = request.page(page);
        }
        prop_assert!(request.validate().is_empty());
    }
}
