/// Graphviz DOT export
pub mod dot;
/// Indented text rendering
pub mod text;
