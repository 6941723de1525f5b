pub mod table;

pub use table::{BenchmarkRow, BenchmarkTable};
