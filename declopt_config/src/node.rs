use crate::value::FromValue;

const KEY_SEPARATOR: char = '.';

/// A node in the configuration tree.
///
/// Each node has a name, an optional raw (string) value, and an ordered list of children.
/// Children are addressed with dotted keys relative to a node (ex: `server.port`).
/// Sibling names may repeat; lookups always resolve to the first match.
///
/// ### Example
/// ```
/// use declopt_config::Node;
///
/// let mut root = Node::new("root");
/// root.set("server.port", "8080");
/// root.get_mut("server.bind").add("host", "localhost");
///
/// assert_eq!(root.value_or("server.port", 0u64), 8080);
/// assert_eq!(root.get("server.bind.host").and_then(|n| n.value()), Some("localhost"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    value: Option<String>,
    children: Vec<Node>,
}

impl Node {
    /// Create an empty node.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            children: Vec::default(),
        }
    }

    /// The name of this node.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw value of this node, if one has been set.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// The children of this node, in insertion order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Set the raw value at `key`, creating any missing nodes along the way.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.get_mut(key).value = Some(value.into());
    }

    /// Find the node at `key`.
    pub fn get(&self, key: &str) -> Option<&Node> {
        let mut node = self;

        for part in segments(key) {
            node = node.children.iter().find(|child| child.name == part)?;
        }

        Some(node)
    }

    /// Get the node at `key`, creating it (and any missing ancestors) when absent.
    pub fn get_mut(&mut self, key: &str) -> &mut Node {
        let mut node = self;

        for part in segments(key) {
            let position = match node.children.iter().position(|child| child.name == part) {
                Some(position) => position,
                None => {
                    node.children.push(Node::new(part));
                    node.children.len() - 1
                }
            };
            node = &mut node.children[position];
        }

        node
    }

    /// Append a child holding `value`.
    /// An existing child of the same name is left in place.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Node {
        let mut child = Node::new(name);
        child.value = Some(value.into());
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Remove every child of this node.
    pub fn remove_children(&mut self) {
        self.children.clear();
    }

    /// Read the value at `key` as a `T`.
    ///
    /// Falls back to `default` when the key is absent, has no value, or its value does not convert.
    pub fn value_or<T: FromValue>(&self, key: &str, default: T) -> T {
        self.get(key)
            .and_then(Node::value)
            .and_then(T::from_value)
            .unwrap_or(default)
    }
}

fn segments(key: &str) -> impl Iterator<Item = &str> {
    key.split(KEY_SEPARATOR).filter(|part| !part.is_empty())
}
