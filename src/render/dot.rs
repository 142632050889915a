//! Graphviz export of an induced tree.
use crate::error::{InductionError, Result};
use crate::trees::tree::DecisionTree;
use std::fmt::Write as _;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

const GRAPH_OPTIONS: &str = "ranksep=7; nodesep=1; overlap=false;";

/// Graphviz renderer invoked by [`render_svg`].
pub const DOT_TOOL: &str = "dot";

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Describes the tree as a DOT digraph: nodes in pre-order, then one labelled
/// edge per branch.
pub fn to_dot(tree: &DecisionTree) -> String {
    let mut out = String::from("digraph tree {\n");
    let _ = writeln!(out, "    {}", GRAPH_OPTIONS);
    for (_, id) in tree.pre_order() {
        let _ = writeln!(out, "    {} [label=\"{}\"];", id, escape(tree.node(id).name()));
    }
    for edge in tree.edges() {
        let _ = writeln!(
            out,
            "    {} -> {} [label=\"{}\"];",
            edge.parent,
            edge.child,
            escape(edge.value)
        );
    }
    out.push_str("}\n");
    out
}

/// Writes [`to_dot`] output to `path`.
pub fn write_dot<P: AsRef<Path>>(tree: &DecisionTree, path: P) -> Result<()> {
    fs::write(path, to_dot(tree))?;
    Ok(())
}

/// Converts a DOT file into an SVG image with Graphviz.
///
/// # Errors
///
/// Returns [`InductionError::ExternalToolUnavailable`] when `dot` is missing or
/// exits with a failure status. The tree and DOT file are unaffected.
pub fn render_svg<P: AsRef<Path>, Q: AsRef<Path>>(dot_path: P, svg_path: Q) -> Result<()> {
    render_with(DOT_TOOL, dot_path.as_ref(), svg_path.as_ref())
}

fn render_with(tool: &str, dot_path: &Path, svg_path: &Path) -> Result<()> {
    let unavailable = |reason: String| InductionError::ExternalToolUnavailable {
        tool: tool.to_string(),
        reason,
    };

    let status = Command::new(tool)
        .arg("-Tsvg")
        .arg("-Kdot")
        .arg(dot_path)
        .arg("-o")
        .arg(svg_path)
        .status()
        .map_err(|err| match err.kind() {
            ErrorKind::NotFound => unavailable("not installed or not in PATH".to_string()),
            _ => unavailable(err.to_string()),
        })?;

    if !status.success() {
        return Err(unavailable(format!("exited with {}", status)));
    }
    Ok(())
}
