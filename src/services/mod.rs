pub mod csv_exporter;
pub mod moneyline_extractor;
pub mod page_fetcher;

pub use csv_exporter::*;
pub use moneyline_extractor::*;
pub use page_fetcher::*;
