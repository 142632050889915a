use std::fmt::{self, Display, Formatter};

/// Index of a node inside its [`DecisionTree`](super::tree::DecisionTree) arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// What a node does when a row reaches it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// Terminal node emitting a decision.
    Decision { label: String },
    /// Branches on the value of an attribute.
    Attribute { attribute: usize },
}

/// Decision tree node
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeNode {
    kind: NodeKind,
    name: String,
    branch: Option<String>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl TreeNode {
    pub fn decision(label: &str) -> Self {
        Self::new(
            NodeKind::Decision {
                label: label.to_string(),
            },
            format!("Decision: {}", label),
        )
    }

    pub fn attribute(attribute: usize) -> Self {
        Self::new(
            NodeKind::Attribute { attribute },
            format!("Attribute a{}", attribute + 1),
        )
    }

    fn new(kind: NodeKind, name: String) -> Self {
        Self {
            kind,
            name,
            branch: None,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Decision { .. })
    }

    /// Decision label of a leaf.
    pub fn label(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Decision { label } => Some(label.as_str()),
            NodeKind::Attribute { .. } => None,
        }
    }

    /// Attribute tested by an attribute node.
    pub fn attribute_index(&self) -> Option<usize> {
        match self.kind {
            NodeKind::Attribute { attribute } => Some(attribute),
            NodeKind::Decision { .. } => None,
        }
    }

    /// Display name, prefixed with the branch value once attached to a parent.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of the parent's attribute that selects this node.
    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Records the edge value and rewrites the display name to `value ➔ name`.
    pub(crate) fn set_branch(&mut self, value: &str) {
        self.name = format!("{} ➔ {}", value, self.name);
        self.branch = Some(value.to_string());
    }
}
