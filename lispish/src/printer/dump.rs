use std::fmt::Write as _;

use crate::tree::Node;

/// Column at which token text starts in a tree dump.
const TEXT_COLUMN: usize = 42;

/// Dump a node and its descendants, one line per node.
///
/// Each line holds the node's tag, padded so the token text of leaves lines up
/// in one column, and children are indented by two spaces below their parent.
pub fn to_tree_string<'a>(node: impl Into<Node<'a>>) -> String {
    let mut output = String::new();
    write_node(&mut output, node.into(), "");
    output
}

fn write_node(output: &mut String, node: Node<'_>, prefix: &str) {
    let width = TEXT_COLUMN.saturating_sub(prefix.len());
    let _ = writeln!(output, "{prefix}{:<width$} {}", node.tag(), node.text());

    let prefix = format!("{prefix}  ");
    for child in node.children() {
        write_node(output, child, &prefix);
    }
}
