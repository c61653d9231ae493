pub mod analyzer;
pub mod catalog;
pub mod descriptor;
pub mod expr;
pub mod types;
