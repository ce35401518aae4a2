pub mod adapter;
pub mod convert;
pub mod macros;
pub mod sort;
pub mod traits;
