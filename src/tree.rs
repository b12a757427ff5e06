//! Tree model for parsed documents.
//!
//! [`build_tree`] turns a [`Value`] into an owned tree of [`TreeNode`]s that
//! a renderer can walk without touching the value itself: every node carries
//! its display label, its kind, its depth, and whether it is the last child
//! of its parent (the hint connector-drawing code needs).
//!
//! ## Examples
//!
//! ```rust
//! use jsonsift::{build_tree, from_str, NodeKind};
//!
//! let value = from_str(r#"{"items": [1, 2]}"#).unwrap();
//! let root = build_tree(&value);
//!
//! assert_eq!(root.label, "root");
//! assert_eq!(root.kind, NodeKind::Object);
//! assert_eq!(root.children[0].label, "items");
//! assert_eq!(root.children[0].children[1].label, "[1]");
//! ```

use serde::Serialize;

use crate::{Number, Value};

/// Label of the synthetic root node.
pub const ROOT_LABEL: &str = "root";

/// Structural kind of a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NodeKind {
    /// A leaf: null, boolean, number, or string.
    Scalar,
    /// An object container (possibly empty).
    Object,
    /// An array container (possibly empty).
    Array,
}

/// The display payload of a scalar node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ScalarValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

/// One node of the rendered tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeNode {
    /// Property name for object members, `[i]` for array members, `root`
    /// for the root.
    pub label: String,
    /// Structural kind.
    pub kind: NodeKind,
    /// `Some` iff `kind` is [`NodeKind::Scalar`].
    pub scalar: Option<ScalarValue>,
    /// Child nodes, in document order. Empty for scalars; also empty for
    /// empty containers, which still render as container markers.
    pub children: Vec<TreeNode>,
    /// Distance from the root (root is 0).
    pub depth: usize,
    /// Whether this node is the last of its parent's children. Always true
    /// for the root.
    pub last_sibling: bool,
}

/// Builds the tree model for a parsed document.
///
/// Pure: allocates a fresh tree and never mutates the input. Recursion depth
/// matches the document depth, which the parser caps at
/// [`crate::MAX_DEPTH`].
///
/// # Examples
///
/// ```rust
/// use jsonsift::{build_tree, jsonsift, NodeKind, ScalarValue};
///
/// let root = build_tree(&jsonsift!({"a": null}));
/// let leaf = &root.children[0];
/// assert_eq!(leaf.kind, NodeKind::Scalar);
/// assert_eq!(leaf.scalar, Some(ScalarValue::Null));
/// assert_eq!(leaf.depth, 1);
/// assert!(leaf.last_sibling);
/// ```
#[must_use]
pub fn build_tree(value: &Value) -> TreeNode {
    build_node(ROOT_LABEL.to_string(), value, 0, true)
}

fn build_node(label: String, value: &Value, depth: usize, last_sibling: bool) -> TreeNode {
    let (kind, scalar, children) = match value {
        Value::Null => (NodeKind::Scalar, Some(ScalarValue::Null), Vec::new()),
        Value::Bool(b) => (NodeKind::Scalar, Some(ScalarValue::Bool(*b)), Vec::new()),
        Value::Number(n) => (NodeKind::Scalar, Some(ScalarValue::Number(*n)), Vec::new()),
        Value::String(s) => (
            NodeKind::Scalar,
            Some(ScalarValue::String(s.clone())),
            Vec::new(),
        ),
        Value::Array(elements) => {
            let len = elements.len();
            let children = elements
                .iter()
                .enumerate()
                .map(|(i, element)| {
                    build_node(format!("[{i}]"), element, depth + 1, i + 1 == len)
                })
                .collect();
            (NodeKind::Array, None, children)
        }
        Value::Object(map) => {
            let len = map.len();
            let children = map
                .iter()
                .enumerate()
                .map(|(i, (key, member))| {
                    build_node(key.clone(), member, depth + 1, i + 1 == len)
                })
                .collect();
            (NodeKind::Object, None, children)
        }
    };

    TreeNode {
        label,
        kind,
        scalar,
        children,
        depth,
        last_sibling,
    }
}
