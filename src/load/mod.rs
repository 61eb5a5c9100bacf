pub mod reader;
pub mod table;

pub use reader::load_dataset;
pub use table::{Dataset, Record};
