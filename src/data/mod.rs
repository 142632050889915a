/// Categorical dataset with interned tokens
pub mod dataset;
/// Comma-delimited row ingestion
pub mod reader;
