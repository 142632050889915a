/// Gain ratio tree builder and classifier
pub mod classifier;
/// Verbosity gated induction logging
pub mod logger;
/// Tree nodes
pub mod node;
/// Induction parameters
pub mod params;
/// Arena tree and traversals
pub mod tree;
