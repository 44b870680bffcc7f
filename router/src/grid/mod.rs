pub mod dense;

pub use dense::Grid;
