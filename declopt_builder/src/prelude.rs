//! Traits which, typically, may be imported without concern: `use declopt::prelude::*`.
use declopt_config::{FromValue, Node};

/// Behaviour for a configuration tree that parsed options are written into.
///
/// Keys are hierarchical; [`Node`] uses dotted keys (ex: `server.port`).
// Needs to be imported in order to implement a custom destination.
pub trait Destination {
    /// Set the scalar value at `key`, creating the node if necessary.
    fn set_value(&mut self, key: &str, value: &str);

    /// Remove all children of the node at `key`, creating the node if necessary.
    fn remove_children(&mut self, key: &str);

    /// Add a child called `name` holding `value` under the node at `key`.
    fn add_child(&mut self, key: &str, name: &str, value: &str);

    /// Read the value at `key`, falling back to `default` when absent or not a `T`.
    fn value_or<T: FromValue>(&self, key: &str, default: T) -> T;
}

impl Destination for Node {
    fn set_value(&mut self, key: &str, value: &str) {
        self.set(key, value);
    }

    fn remove_children(&mut self, key: &str) {
        self.get_mut(key).remove_children();
    }

    fn add_child(&mut self, key: &str, name: &str, value: &str) {
        self.get_mut(key).add(name, value);
    }

    fn value_or<T: FromValue>(&self, key: &str, default: T) -> T {
        Node::value_or(self, key, default)
    }
}
