pub mod parser;
pub mod writer;

pub use parser::{RouterInput, parse};
pub use writer::write_results;
