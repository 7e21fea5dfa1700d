use scraper::{Html, Selector};
use tracing::debug;
use url::Url;

/// Extract every `<a href>` value from `html`, resolved against `base`.
///
/// Parsing is best-effort: malformed markup yields whatever anchors the
/// HTML5 parser recovers. Empty hrefs are skipped, absolute hrefs are kept
/// exactly as written and relative ones are joined onto `base`. An href that
/// cannot be joined is returned verbatim. Duplicates are preserved in
/// document order.
///
/// Only C0 controls and spaces are trimmed from an href, matching what the
/// URL parser itself strips.
pub fn extract_links(base: &Url, html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    let Ok(link_selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    let mut links = Vec::new();
    for element in document.select(&link_selector) {
        if let Some(href) = element.value().attr("href")
            && let Some(link) = resolve_href(base, href)
        {
            debug!("Found link: {}", link);
            links.push(link);
        }
    }

    links
}

fn resolve_href(base: &Url, href: &str) -> Option<String> {
    let href = href.trim_matches(|c: char| c <= ' ');
    if href.is_empty() {
        return None;
    }

    // Already absolute: leave the caller's spelling alone. An href carrying the
    // base's own scheme may still be relative ("https:page"), so it only counts
    // as absolute when joining would not change it.
    if let Ok(absolute) = Url::parse(href)
        && (absolute.scheme() != base.scheme()
            || base.join(href).is_ok_and(|joined| joined == absolute))
    {
        return Some(href.to_string());
    }

    match base.join(href) {
        Ok(resolved) => Some(resolved.to_string()),
        Err(e) => {
            debug!("Keeping unresolvable href {:?} ({})", href, e);
            Some(href.to_string())
        }
    }
}
