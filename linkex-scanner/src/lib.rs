pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod origin;
pub mod parser;
pub mod progress;
pub mod result;

pub use error::ScanError;
pub use extractor::LinkExtractor;
pub use fetcher::{Fetcher, HttpFetcher};
pub use origin::origin_of;
pub use parser::extract_links;
pub use progress::{ProgressSink, ProgressTask};
pub use result::{LinkMap, PageLinks};
