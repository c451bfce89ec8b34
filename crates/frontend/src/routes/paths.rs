//! URL helpers for the console's routes.

pub const SCHEMA_REGISTRY_PATH: &str = "/schema-registry";

/// `/schema-registry/{subject}?version={version}` with the subject percent-encoded
pub fn schema_details_href(subject: &str, version: i32) -> String {
    format!(
        "{}/{}?version={}",
        SCHEMA_REGISTRY_PATH,
        urlencoding::encode(subject),
        version
    )
}

/// Parse the `version` query parameter; only positive integers are valid
pub fn parse_version_param(raw: Option<&str>) -> Option<i32> {
    raw?.trim().parse::<i32>().ok().filter(|v| *v > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_details_href() {
        assert_eq!(
            schema_details_href("user-events", 3),
            "/schema-registry/user-events?version=3"
        );
        assert_eq!(
            schema_details_href("team/orders value", 1),
            "/schema-registry/team%2Forders%20value?version=1"
        );
    }

    #[test]
    fn test_href_segment_decodes_to_subject() {
        // the router unescapes the segment once before it reaches the page
        for subject in ["a b/c", "rate-100%25", "orders-value"] {
            let href = schema_details_href(subject, 2);
            let segment = href
                .trim_start_matches("/schema-registry/")
                .split('?')
                .next()
                .unwrap();
            assert_eq!(urlencoding::decode(segment).unwrap(), subject);
        }
    }

    #[test]
    fn test_parse_version_param() {
        assert_eq!(parse_version_param(Some("2")), Some(2));
        assert_eq!(parse_version_param(Some(" 7 ")), Some(7));
        assert_eq!(parse_version_param(Some("0")), None);
        assert_eq!(parse_version_param(Some("-1")), None);
        assert_eq!(parse_version_param(Some("latest")), None);
        assert_eq!(parse_version_param(None), None);
    }
}
