use serde::{Deserialize, Serialize};

/// A single node in a path spec: either a directory with ordered
/// children or a file with its placeholder content.
///
/// A path spec is a finite literal tree built once at startup and
/// never mutated. Names must be unique within a sibling group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Node {
    Directory(Vec<Entry>),
    File(String),
}

/// A named child of a [`Node::Directory`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub node: Node,
}

impl Node {
    /// Build a directory node from `(name, node)` pairs, preserving
    /// their order.
    pub fn dir<N, I>(entries: I) -> Node
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Node)>,
    {
        let entries = entries
            .into_iter()
            .map(|(name, node)| Entry {
                name: name.into(),
                node,
            })
            .collect();

        Node::Directory(entries)
    }

    /// Build a file node with the given placeholder content.
    pub fn file(content: impl Into<String>) -> Node {
        Node::File(content.into())
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Directory(_))
    }

    /// Look up a direct child by name. Returns `None` for file nodes.
    pub fn get(&self, name: &str) -> Option<&Node> {
        match self {
            Node::Directory(entries) => entries
                .iter()
                .find(|entry| entry.name == name)
                .map(|entry| &entry.node),
            Node::File(_) => None,
        }
    }

    /// Total number of file leaves in this subtree.
    pub fn file_count(&self) -> usize {
        match self {
            Node::File(_) => 1,
            Node::Directory(entries) => {
                entries.iter().map(|entry| entry.node.file_count()).sum()
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn preserves_declared_order() {
        let node = Node::dir([
            ("b.md", Node::file("")),
            ("a.md", Node::file("")),
        ]);

        let Node::Directory(entries) = &node else {
            panic!("expected a directory node");
        };

        let names: Vec<&str> = entries.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(vec!["b.md", "a.md"], names);
    }

    #[test]
    fn counts_nested_file_leaves() {
        let node = Node::dir([
            ("_index.md", Node::file("")),
            (
                "nested",
                Node::dir([
                    ("one.md", Node::file("# One")),
                    ("two.md", Node::file("# Two")),
                ]),
            ),
        ]);

        assert_eq!(3, node.file_count());
    }

    #[test]
    fn looks_up_children_by_name() {
        let node = Node::dir([("about.md", Node::file("# About"))]);

        assert!(node.get("about.md").is_some());
        assert!(node.get("missing.md").is_none());
        assert!(node.get("about.md").expect("child exists").get("x").is_none());
    }
}
