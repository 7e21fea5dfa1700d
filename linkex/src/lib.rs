// Include handlers module directly from handlers.rs
#[path = "handlers.rs"]
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{collect_urls, load_urls_from_file, parse_page_url, parse_url_line};

// Re-export extraction functionality from linkex-core
pub use linkex_core::{ExtractOptions, OutputFormat, execute_extract, render_links};
