use crate::error::{Result, ScanError};
use url::{Origin, Url};

/// Scheme, host and port of `url` as used for grouping, e.g.
/// `https://example.com` or `http://127.0.0.1:8080`.
///
/// Default ports are omitted. URLs without a tuple origin (`data:`, `file:`,
/// `mailto:` ...) cannot be grouped and are rejected.
pub fn origin_of(url: &Url) -> Result<String> {
    match url.origin() {
        origin @ Origin::Tuple(..) => Ok(origin.ascii_serialization()),
        Origin::Opaque(_) => Err(ScanError::InvalidUrl(format!(
            "{} has no scheme/host origin",
            url
        ))),
    }
}
