pub mod error;
pub mod input;
pub mod output;
pub mod scrape;

pub use error::ScrapeError;
pub use input::ScrapeInput;
pub use output::{read_output, write_output};
pub use scrape::{ScrapeOptions, ScrapeOutcome, ScrapeProgressCallback, execute_scrape};
