//! Simplified DOM tree for the Sprig parser.
//!
//! This crate provides an arena-based tree of comment, element, text and
//! fragment nodes, loosely modelled on the
//! [DOM Living Standard](https://dom.spec.whatwg.org/).
//!
//! # Design
//!
//! The tree uses arena allocation with [`NodeId`] indices for all relationships.
//! Parents own their children through the child list; the parent and sibling
//! fields are plain indices used for navigation only, so the structure has no
//! reference cycles.
//!
//! Links are read-only from outside the crate: a node's parent is fixed when
//! it is created, and only [`DomTree::append_child`] writes child lists and
//! sibling links.
//!
//! Unlike a document tree there is no single root node: the parsed forest is
//! an ordered list of top-level nodes ([`DomTree::roots`]).

use std::collections::HashMap;

/// Map of attribute names to values for an element.
pub type AttributesMap = HashMap<String, String>;

/// A type-safe index into the DOM tree.
///
/// Indices are handed out in allocation order and stay valid for the
/// lifetime of the tree; nodes are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// A node in the arena.
///
/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
///
/// This node stores indices for parent/child/sibling relationships,
/// enabling O(1) traversal in any direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// "Each node has an associated node type"
    node_type: NodeType,

    /// [§ 4.4](https://dom.spec.whatwg.org/#concept-tree-parent)
    /// "An object that participates in a tree has a parent, which is either
    /// null or an object."
    ///
    /// Set once by the node constructor and never changed afterwards.
    parent: Option<NodeId>,

    /// [§ 4.4](https://dom.spec.whatwg.org/#concept-tree-child)
    /// "A node has an associated list of children"
    ///
    /// Only elements and fragments ever have children.
    children: Vec<NodeId>,

    /// [§ 4.4](https://dom.spec.whatwg.org/#concept-tree-next-sibling)
    /// "An object A's next sibling is the object immediately following A
    /// in the children of A's parent."
    next_sibling: Option<NodeId>,

    /// [§ 4.4](https://dom.spec.whatwg.org/#concept-tree-previous-sibling)
    /// "An object A's previous sibling is the object immediately preceding A
    /// in the children of A's parent."
    prev_sibling: Option<NodeId>,
}

impl Node {
    fn with_type(node_type: NodeType, parent: Option<NodeId>, children: Vec<NodeId>) -> Self {
        Self {
            node_type,
            parent,
            children,
            next_sibling: None,
            prev_sibling: None,
        }
    }

    /// The node's kind and payload.
    #[must_use]
    pub const fn node_type(&self) -> &NodeType {
        &self.node_type
    }

    /// The parent given at construction.
    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The children in document order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// The following sibling, once linked by [`DomTree::append_child`].
    #[must_use]
    pub const fn next_sibling(&self) -> Option<NodeId> {
        self.next_sibling
    }

    /// The preceding sibling, once linked by [`DomTree::append_child`].
    #[must_use]
    pub const fn prev_sibling(&self) -> Option<NodeId> {
        self.prev_sibling
    }

    /// Create a comment node holding `value`.
    #[must_use]
    pub fn comment(value: impl Into<String>, parent: Option<NodeId>) -> Self {
        Self::with_type(NodeType::Comment(value.into()), parent, Vec::new())
    }

    /// Create a text node holding `value`.
    #[must_use]
    pub fn text(value: impl Into<String>, parent: Option<NodeId>) -> Self {
        Self::with_type(NodeType::Text(value.into()), parent, Vec::new())
    }

    /// Create an element node with no children.
    ///
    /// The tag name is stored upper-cased, whatever case it is given in.
    #[must_use]
    pub fn element(tag: &str, attrs: AttributesMap, parent: Option<NodeId>) -> Self {
        let data = ElementData {
            tag_name: tag.to_ascii_uppercase(),
            attrs,
        };
        Self::with_type(NodeType::Element(data), parent, Vec::new())
    }

    /// Create a fragment wrapping `children`.
    ///
    /// Fragments are root-only containers: they never have a parent or
    /// siblings, and the children keep whatever parent they were created with.
    #[must_use]
    pub fn fragment(children: Vec<NodeId>) -> Self {
        Self::with_type(NodeType::Fragment, None, children)
    }
}

/// The kind of a node together with its kind-specific payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeType {
    /// [§ 4.9 Interface Element](https://dom.spec.whatwg.org/#interface-element)
    /// "Element nodes are simply known as elements."
    Element(ElementData),
    /// [§ 4.10 Interface Text](https://dom.spec.whatwg.org/#interface-text)
    /// "Text nodes are known as text."
    Text(String),
    /// [§ 4.7 Interface Comment](https://dom.spec.whatwg.org/#interface-comment)
    /// "Comment nodes are known as comments."
    Comment(String),
    /// [§ 4.6 Interface DocumentFragment](https://dom.spec.whatwg.org/#interface-documentfragment)
    Fragment,
}

impl NodeType {
    /// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#dom-node-nodetype)
    ///
    /// The numeric `nodeType` constant for this kind of node:
    /// `ELEMENT_NODE` (1), `TEXT_NODE` (3), `COMMENT_NODE` (8) or
    /// `DOCUMENT_FRAGMENT_NODE` (11).
    #[must_use]
    pub const fn node_type_code(&self) -> u16 {
        match self {
            Self::Element(_) => 1,
            Self::Text(_) => 3,
            Self::Comment(_) => 8,
            Self::Fragment => 11,
        }
    }

    /// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#dom-node-nodename)
    ///
    /// The upper-cased tag name for elements, otherwise `#text`, `#comment`
    /// or `#fragment`.
    #[must_use]
    pub fn node_name(&self) -> &str {
        match self {
            Self::Element(data) => &data.tag_name,
            Self::Text(_) => "#text",
            Self::Comment(_) => "#comment",
            Self::Fragment => "#fragment",
        }
    }

    /// The character data of a text or comment node.
    #[must_use]
    pub fn node_value(&self) -> Option<&str> {
        match self {
            Self::Text(value) | Self::Comment(value) => Some(value),
            Self::Element(_) | Self::Fragment => None,
        }
    }
}

/// Element-specific data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    /// The element's name, upper-cased.
    pub tag_name: String,
    /// Attribute names as written mapped to their values.
    pub attrs: AttributesMap,
}

impl ElementData {
    /// The lower-cased tag name, as used for table lookups.
    #[must_use]
    pub fn local_name(&self) -> String {
        self.tag_name.to_ascii_lowercase()
    }

    /// Returns the value of the attribute `name`, if present.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }
}

/// Arena-based DOM forest with O(1) node access and traversal.
///
/// This structure stores all nodes in a contiguous vector, using indices
/// for all relationships. This provides:
/// - O(1) access to any node by `NodeId`
/// - O(1) parent/sibling traversal
/// - No borrowing issues (indices instead of references)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomTree {
    /// All nodes in the tree, indexed by `NodeId`.
    nodes: Vec<Node>,
    /// Top-level nodes in document order.
    roots: Vec<NodeId>,
}

impl DomTree {
    /// Create an empty forest.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            roots: Vec::new(),
        }
    }

    /// The top-level nodes, in document order.
    #[must_use]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get the number of nodes in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if no node has been allocated yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a node built by one of the [`Node`] constructors and return
    /// its ID. The node is not yet attached to any child list.
    pub fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Allocate a fragment over existing nodes.
    ///
    /// The children are not re-parented and keep their sibling links.
    pub fn create_fragment(&mut self, children: Vec<NodeId>) -> NodeId {
        self.alloc(Node::fragment(children))
    }

    /// [§ 4.2.2 Append](https://dom.spec.whatwg.org/#concept-node-append)
    ///
    /// Appends `child` as the last entry of `parent`'s children, or of the
    /// root list when `parent` is `None`, and links it to the previous last
    /// entry. The child's own parent field is left untouched.
    pub fn append_child(&mut self, parent: Option<NodeId>, child: NodeId) {
        let list = match parent {
            Some(id) => &mut self.nodes[id.0].children,
            None => &mut self.roots,
        };
        let prev_last = list.last().copied();
        list.push(child);

        if let Some(prev_id) = prev_last {
            self.nodes[prev_id.0].next_sibling = Some(child);
            self.nodes[child.0].prev_sibling = Some(prev_id);
        }
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get all children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Get the first child of a node.
    #[must_use]
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.children.first().copied())
    }

    /// Get the last child of a node.
    #[must_use]
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.children.last().copied())
    }

    /// Get the next sibling of a node.
    #[must_use]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.next_sibling)
    }

    /// Get the previous sibling of a node.
    #[must_use]
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.prev_sibling)
    }

    /// Iterate over all ancestors of a node, from parent to the top level.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> AncestorIterator<'_> {
        AncestorIterator {
            tree: self,
            current: self.parent(id),
        }
    }

    /// Iterate over preceding siblings (from immediately before to first).
    #[must_use]
    pub fn preceding_siblings(&self, id: NodeId) -> SiblingIterator<'_> {
        SiblingIterator {
            tree: self,
            current: self.prev_sibling(id),
            forward: false,
        }
    }

    /// Iterate over following siblings (from immediately after to last).
    #[must_use]
    pub fn following_siblings(&self, id: NodeId) -> SiblingIterator<'_> {
        SiblingIterator {
            tree: self,
            current: self.next_sibling(id),
            forward: true,
        }
    }

    /// Get element data if this node is an element.
    #[must_use]
    pub fn as_element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Element(data) => Some(data),
            _ => None,
        })
    }

    /// Get text content if this node is a text node.
    #[must_use]
    pub fn as_text(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// Get the data of a comment node.
    #[must_use]
    pub fn as_comment(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Comment(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// [§ 4.4](https://dom.spec.whatwg.org/#dom-node-textcontent)
    ///
    /// Concatenation of the text descendants of `id`, in tree order.
    /// Comments contribute nothing.
    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match self.get(id).map(|n| &n.node_type) {
            Some(NodeType::Text(data)) => out.push_str(data),
            Some(NodeType::Element(_) | NodeType::Fragment) => {
                for &child in self.children(id) {
                    self.collect_text(child, out);
                }
            }
            Some(NodeType::Comment(_)) | None => {}
        }
    }
}

/// Iterator over ancestors of a node.
pub struct AncestorIterator<'a> {
    tree: &'a DomTree,
    current: Option<NodeId>,
}

impl Iterator for AncestorIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.parent(id);
        Some(id)
    }
}

/// Iterator walking sibling links in one direction.
pub struct SiblingIterator<'a> {
    tree: &'a DomTree,
    current: Option<NodeId>,
    forward: bool,
}

impl Iterator for SiblingIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = if self.forward {
            self.tree.next_sibling(id)
        } else {
            self.tree.prev_sibling(id)
        };
        Some(id)
    }
}
