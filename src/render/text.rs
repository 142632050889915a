use crate::error::Result;
use crate::trees::node::NodeId;
use crate::trees::tree::DecisionTree;
use std::fs;
use std::path::Path;

/// Renders the tree one node per line, in pre-order, with box drawing guides.
///
/// ```text
/// Attribute a1
/// ├── low ➔ Decision: yes
/// └── high ➔ Attribute a2
///     └── x ➔ Decision: no
/// ```
pub fn render_text(tree: &DecisionTree) -> String {
    let mut out = String::new();
    for (_, id) in tree.pre_order() {
        let path = tree.path_to_root(id);
        // Skip the root; walk from the root's children down to `id`.
        for (position, &ancestor) in path.iter().rev().skip(1).enumerate() {
            let own_line = position + 2 == path.len();
            let guide = match (is_last_child(tree, ancestor), own_line) {
                (true, true) => "└── ",
                (false, true) => "├── ",
                (true, false) => "    ",
                (false, false) => "│   ",
            };
            out.push_str(guide);
        }
        out.push_str(tree.node(id).name());
        out.push('\n');
    }
    out
}

fn is_last_child(tree: &DecisionTree, id: NodeId) -> bool {
    tree.node(id)
        .parent()
        .map_or(true, |parent| tree.node(parent).children().last() == Some(&id))
}

/// Writes [`render_text`] output to `path`.
pub fn save_text<P: AsRef<Path>>(tree: &DecisionTree, path: P) -> Result<()> {
    fs::write(path, render_text(tree))?;
    Ok(())
}
