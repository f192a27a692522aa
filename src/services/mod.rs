pub mod listing_extractor;
pub mod listing_fetcher;
pub mod report_source;

pub use listing_extractor::*;
pub use listing_fetcher::*;
pub use report_source::*;
