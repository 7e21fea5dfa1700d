pub mod extract;
pub mod output;
pub mod progress;

pub use extract::{ExtractOptions, execute_extract};
pub use output::{OutputFormat, render_links};
pub use progress::BarProgress;
