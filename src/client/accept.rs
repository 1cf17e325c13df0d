//! Accept header policy.
//!
//! Media Type values to access preview APIs, collected in one table so the
//! endpoint -> header mapping stays auditable.
//!
//! https://developer.github.com/v3/previews/#api-previews

/// Default content negotiation, no custom Accept header.
pub(crate) const STABLE: &[&str] = &[];

// https://developer.github.com/changes/2016-05-12-reactions-api-preview/
pub(crate) const MEDIA_TYPE_REACTIONS_PREVIEW: &str =
    "application/vnd.github.squirrel-girl-preview";

// https://developer.github.com/changes/2016-09-14-Integrations-Early-Access/
pub(crate) const MEDIA_TYPE_INTEGRATION_PREVIEW: &str =
    "application/vnd.github.machine-man-preview+json";

/// Per-operation tables; endpoints reference these rather than scattering
/// literals at call sites.
pub(crate) const REACTIONS: &[&str] = &[MEDIA_TYPE_REACTIONS_PREVIEW];
/// Issue reads (get and list): integration metadata plus the `reactions`
/// rollup object on each issue.
pub(crate) const ISSUES: &[&str] =
    &[MEDIA_TYPE_INTEGRATION_PREVIEW, MEDIA_TYPE_REACTIONS_PREVIEW];

/// Join a media type table into a single Accept value. Multiple preview
/// types aggregate into one comma separated header.
pub(crate) fn header_value(media_types: &[&str]) -> Option<String> {
    if media_types.is_empty() {
        None
    } else {
        Some(media_types.join(","))
    }
}

#[cfg(test)]
mod test {
    use super::{header_value, ISSUES, REACTIONS, STABLE};

    #[test]
    fn stable_operations_use_default_negotiation() {
        assert_eq!(header_value(STABLE), None);
    }

    #[test]
    fn single_preview() {
        assert_eq!(
            header_value(REACTIONS).as_deref(),
            Some("application/vnd.github.squirrel-girl-preview")
        );
    }

    #[test]
    fn multiple_previews_comma_join() {
        assert_eq!(
            header_value(ISSUES).as_deref(),
            Some(
                "application/vnd.github.machine-man-preview+json,\
                 application/vnd.github.squirrel-girl-preview"
            )
        );
    }
}
