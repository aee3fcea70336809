use sprig_dom::{DomTree, NodeId, NodeType};

/// Print a node and its descendants for debugging.
pub fn print_tree(tree: &DomTree, id: NodeId, indent: usize) {
    let mut out = String::new();
    write_node(tree, id, indent, &mut out);
    print!("{out}");
}

/// Print every top-level node of `tree`.
pub fn print_forest(tree: &DomTree) {
    print!("{}", format_tree(tree));
}

/// Render every top-level node of `tree` as an indented outline, one node
/// per line. Attributes are sorted by name.
#[must_use]
pub fn format_tree(tree: &DomTree) -> String {
    let mut out = String::new();
    for &root in tree.roots() {
        write_node(tree, root, 0, &mut out);
    }
    out
}

fn write_node(tree: &DomTree, id: NodeId, indent: usize, out: &mut String) {
    let Some(node) = tree.get(id) else {
        return;
    };
    let line = match node.node_type() {
        NodeType::Element(data) => {
            let mut attrs: Vec<_> = data.attrs.iter().collect();
            attrs.sort();
            let attrs: Vec<String> = attrs
                .into_iter()
                .map(|(k, v)| {
                    if v.is_empty() {
                        k.clone()
                    } else {
                        format!("{k}=\"{v}\"")
                    }
                })
                .collect();
            if attrs.is_empty() {
                format!("<{}>", data.tag_name)
            } else {
                format!("<{} {}>", data.tag_name, attrs.join(" "))
            }
        }
        NodeType::Text(data) => {
            let display = data.replace('\n', "\\n").replace(' ', "\u{00B7}");
            format!("\"{display}\"")
        }
        NodeType::Comment(data) => format!("<!-- {data} -->"),
        NodeType::Fragment => "#fragment".to_string(),
    };
    out.push_str(&"  ".repeat(indent));
    out.push_str(&line);
    out.push('\n');
    for &child_id in tree.children(id) {
        write_node(tree, child_id, indent + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tree() {
        let tree = crate::parse("<p b=\"2\" a><!--c-->x y</p>z").unwrap();
        let expected = "<P a b=\"2\">\n  <!-- c -->\n  \"x\u{00B7}y\"\n\"z\"\n";
        assert_eq!(format_tree(&tree), expected);
    }

    #[test]
    fn test_format_subtree_indents_and_escapes() {
        let tree = crate::parse("<ul><li>a\nb</li><br></ul>").unwrap();
        let ul = tree.roots()[0];
        let mut out = String::new();
        write_node(&tree, ul, 1, &mut out);
        assert_eq!(out, "  <UL>\n    <LI>\n      \"a\\nb\"\n    <BR>\n");
    }
}
