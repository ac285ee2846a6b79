pub mod dictionaries;
pub mod tracing;
