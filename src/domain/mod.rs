pub mod report;
pub mod report_filter;

pub use report::*;
pub use report_filter::*;
