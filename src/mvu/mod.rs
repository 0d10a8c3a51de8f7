pub mod delete;
pub mod runtime;
