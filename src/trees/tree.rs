//! Arena backed decision tree and its traversals.
use super::node::{NodeId, NodeKind, TreeNode};
use crate::error::{InductionError, Result};

/// A labelled edge between an attribute node and one of its children.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge<'a> {
    pub parent: NodeId,
    pub child: NodeId,
    pub value: &'a str,
}

/// Induced decision tree.
///
/// Nodes live in one arena. Each node owns the ids of its children, in the order
/// the branch values were visited, and keeps a plain id back to its parent. The
/// root is always the first node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecisionTree {
    nodes: Vec<TreeNode>,
    nattributes: usize,
}

impl DecisionTree {
    pub(crate) fn new(nattributes: usize) -> Self {
        Self {
            nodes: Vec::new(),
            nattributes,
        }
    }

    /// Appends `node` under `parent`, or as the root when `parent` is `None`.
    pub(crate) fn push(&mut self, mut node: TreeNode, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        node.parent = parent;
        self.nodes.push(node);
        if let Some(parent) = parent {
            self.nodes[parent.0].children.push(id);
        }
        id
    }

    pub(crate) fn set_branch(&mut self, id: NodeId, value: &str) {
        self.nodes[id.0].set_branch(value);
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Node `id` of this tree.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not handed out by this tree.
    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }

    pub fn get(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of attributes a row must carry to be classified.
    pub fn nattributes(&self) -> usize {
        self.nattributes
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_leaf()).count()
    }

    /// Number of edges on the longest root to leaf path.
    pub fn depth(&self) -> usize {
        self.pre_order().map(|(depth, _)| depth).max().unwrap_or(0)
    }

    /// Depth-first pre-order walk yielding `(depth, node)` pairs, root first.
    pub fn pre_order(&self) -> PreOrder<'_> {
        let stack = if self.nodes.is_empty() {
            Vec::new()
        } else {
            vec![(0, self.root())]
        };
        PreOrder { tree: self, stack }
    }

    /// Every parent to child edge, in pre-order of the child.
    pub fn edges(&self) -> Vec<Edge<'_>> {
        self.pre_order()
            .filter_map(|(_, id)| {
                let node = self.node(id);
                Some(Edge {
                    parent: node.parent()?,
                    child: id,
                    value: node.branch()?,
                })
            })
            .collect()
    }

    /// Ids from `id` up to and including the root.
    pub fn path_to_root(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = vec![id];
        let mut current = id;
        while let Some(parent) = self.node(current).parent() {
            path.push(parent);
            current = parent;
        }
        path
    }

    /// Child of `id` reached through branch `value`.
    pub fn child_for(&self, id: NodeId, value: &str) -> Option<NodeId> {
        self.node(id)
            .children()
            .iter()
            .copied()
            .find(|&child| self.node(child).branch() == Some(value))
    }

    /// Walks `row` from the root to a leaf and returns the leaf's decision.
    ///
    /// # Errors
    ///
    /// Returns an error if the row length doesn't match the attributes the tree was
    /// built on, or if the row carries a value that never occurred in training.
    pub fn classify<S: AsRef<str>>(&self, row: &[S]) -> Result<&str> {
        if row.len() != self.nattributes {
            return Err(InductionError::RowLength {
                expected: self.nattributes,
                found: row.len(),
            });
        }
        if self.is_empty() {
            return Err(InductionError::NotFitted);
        }
        let mut current = self.root();
        loop {
            match self.node(current).kind() {
                NodeKind::Decision { label } => return Ok(label.as_str()),
                NodeKind::Attribute { attribute } => {
                    let value = row[*attribute].as_ref();
                    current = self.child_for(current, value).ok_or_else(|| {
                        InductionError::UnknownValue {
                            attribute: *attribute,
                            value: value.to_string(),
                        }
                    })?;
                }
            }
        }
    }
}

/// Iterator returned by [`DecisionTree::pre_order`].
pub struct PreOrder<'a> {
    tree: &'a DecisionTree,
    stack: Vec<(usize, NodeId)>,
}

impl Iterator for PreOrder<'_> {
    type Item = (usize, NodeId);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, id) = self.stack.pop()?;
        self.stack.extend(
            self.tree
                .node(id)
                .children()
                .iter()
                .rev()
                .map(|&child| (depth + 1, child)),
        );
        Some((depth, id))
    }
}
