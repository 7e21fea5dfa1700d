// Rendering of extraction results

use linkex_scanner::LinkMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One link per line, grouped by origin
    Stdout,
    /// Pretty-printed object of origin -> links
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "stdout" => Some(OutputFormat::Stdout),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Stdout => "stdout",
            OutputFormat::Json => "json",
        }
    }
}

/// Render `links` in the requested format.
///
/// An empty map renders as an empty string in both formats. Anything else
/// ends with a newline.
pub fn render_links(links: &LinkMap, format: OutputFormat) -> serde_json::Result<String> {
    if links.is_empty() {
        return Ok(String::new());
    }

    match format {
        OutputFormat::Stdout => Ok(render_lines(links)),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(links)?;
            out.push('\n');
            Ok(out)
        }
    }
}

fn render_lines(links: &LinkMap) -> String {
    let mut out = String::new();
    for (_origin, origin_links) in links.iter() {
        for link in origin_links {
            out.push_str(link);
            out.push('\n');
        }
    }
    out
}
