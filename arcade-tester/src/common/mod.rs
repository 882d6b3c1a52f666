pub mod scenario;
pub mod util;

pub use util::{load_catalog_text, parse_seeds, report_timestamp, split_csv};
