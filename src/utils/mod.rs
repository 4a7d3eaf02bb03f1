pub mod color;
pub mod constants;
pub(crate) mod file;
pub mod tools;
