//! # schema.org Name Handling
//!
//! Expanded JSON-LD spells every schema.org term as an absolute URL; the
//! graph indexes everything by bare name. These helpers translate between
//! the two spellings.

/// The canonical schema.org URL prefixes. Both schemes appear in the wild.
const SCHEMA_ORG_PREFIXES: [&str; 2] = ["http://schema.org/", "https://schema.org/"];

/// Strips a schema.org URL prefix from a term, leaving bare names unchanged.
///
/// Pure and total — and idempotent, since a stripped name no longer carries
/// a prefix to strip.
///
/// ```
/// use sdlint_graph::clean_name;
/// assert_eq!(clean_name("http://schema.org/Person"), "Person");
/// assert_eq!(clean_name("https://schema.org/name"), "name");
/// assert_eq!(clean_name("Person"), "Person");
/// ```
#[must_use]
pub fn clean_name(raw: &str) -> &str {
    for prefix in SCHEMA_ORG_PREFIXES {
        if let Some(bare) = raw.strip_prefix(prefix) {
            return bare;
        }
    }
    raw
}

/// Whether a value is spelled as a schema.org URL.
///
/// Used to distinguish "unrecognized schema.org term" (reportable) from
/// "term of some foreign vocabulary" (tolerated).
#[must_use]
pub fn is_schema_org_url(raw: &str) -> bool {
    SCHEMA_ORG_PREFIXES
        .iter()
        .any(|prefix| raw.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_http_prefix() {
        assert_eq!(clean_name("http://schema.org/Person"), "Person");
    }

    #[test]
    fn strips_https_prefix() {
        assert_eq!(clean_name("https://schema.org/Person"), "Person");
    }

    #[test]
    fn leaves_bare_names_alone() {
        assert_eq!(clean_name("Person"), "Person");
        assert_eq!(clean_name(""), "");
    }

    #[test]
    fn leaves_foreign_urls_alone() {
        assert_eq!(
            clean_name("http://example.org/Person"),
            "http://example.org/Person"
        );
    }

    #[test]
    fn clean_name_is_idempotent() {
        for raw in [
            "http://schema.org/Person",
            "https://schema.org/name",
            "Person",
            "http://example.org/foo",
        ] {
            assert_eq!(clean_name(clean_name(raw)), clean_name(raw));
        }
    }

    #[test]
    fn recognizes_schema_org_urls() {
        assert!(is_schema_org_url("http://schema.org/Thing"));
        assert!(is_schema_org_url("https://schema.org/Thing"));
        assert!(!is_schema_org_url("Thing"));
        assert!(!is_schema_org_url("http://example.org/Thing"));
    }
}
