//! JSON view of a parsed tree.

use std::collections::BTreeMap;

use serde::Serialize;
use sprig_dom::{DomTree, Node, NodeId, NodeType};

/// One node with its subtree, shaped for `serde_json`.
#[derive(Debug, Serialize)]
pub struct NodeView {
    #[serde(rename = "type")]
    kind: &'static str,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attributes: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<NodeView>,
}

/// Views of every top-level node.
pub fn forest(tree: &DomTree) -> Vec<NodeView> {
    tree.roots().iter().map(|&id| view(tree, id)).collect()
}

fn view(tree: &DomTree, id: NodeId) -> NodeView {
    let node_type = tree.get(id).map(Node::node_type);
    let kind = match node_type {
        Some(NodeType::Element(_)) => "element",
        Some(NodeType::Text(_)) => "text",
        Some(NodeType::Comment(_)) => "comment",
        Some(NodeType::Fragment) | None => "fragment",
    };
    NodeView {
        kind,
        name: node_type.map_or_else(String::new, |t| t.node_name().to_string()),
        value: node_type.and_then(NodeType::node_value).map(str::to_string),
        attributes: tree
            .as_element(id)
            .map(|e| e.attrs.iter().map(|(k, v)| (k.clone(), v.clone())).collect()),
        children: tree.children(id).iter().map(|&c| view(tree, c)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let tree = sprig_html::parse("<a href=x>t<!--c--></a>").unwrap();
        let json = serde_json::to_value(forest(&tree)).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "type": "element",
                "name": "A",
                "attributes": { "href": "x" },
                "children": [
                    { "type": "text", "name": "#text", "value": "t" },
                    { "type": "comment", "name": "#comment", "value": "c" }
                ]
            }])
        );
    }
}
