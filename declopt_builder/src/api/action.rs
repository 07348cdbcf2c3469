use crate::api::Opt;
use crate::prelude::Destination;

/// The behaviour run against the destination when an option is found, or confirmed absent.
///
/// Every option carries two actions: one for when it is matched on the command line, and one seeded up front for when it is not.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Action {
    /// Do nothing.
    #[default]
    Nothing,
    /// Store the raw value text at the option's key, plus one child per slot (named after the slot).
    StoreValues,
    /// Store the given constant text, split by the option's delimiter, as though it were given on the command line.
    StoreConstants(String),
    /// Store the logical inverse of the option's boolean value.
    /// Only valid on options taking precisely one slot.
    StoreInvertedBool,
}

impl Action {
    pub(crate) fn perform<D: Destination>(
        &self,
        destination: &mut D,
        option: &Opt,
        values: &str,
        value_list: &[String],
    ) {
        match self {
            Action::Nothing => {}
            Action::StoreValues => store_values(destination, option, values, value_list),
            Action::StoreConstants(constants) => {
                let constant_list = option.split(constants);
                store_values(destination, option, constants, &constant_list);
            }
            Action::StoreInvertedBool => {
                if option.slots().len() != 1 {
                    unreachable!("internal error - inverted boolean requires exactly one slot");
                }

                let inverted = (!declopt_config::parse_bool(values).unwrap_or(false)).to_string();
                store_values(destination, option, &inverted, &[inverted.clone()]);
            }
        }
    }
}

fn store_values<D: Destination>(
    destination: &mut D,
    option: &Opt,
    values: &str,
    value_list: &[String],
) {
    // The top-level node holds the raw, unsplit text.
    destination.set_value(option.key(), values);
    // Clear out children from an earlier (default) store.
    destination.remove_children(option.key());

    if value_list.len() == option.slots().len() {
        for (slot, value) in option.slots().iter().zip(value_list) {
            destination.add_child(option.key(), slot.name(), value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Slot;
    use declopt_config::Node;
    use rstest::rstest;

    fn children(node: &Node, key: &str) -> Vec<(String, String)> {
        node.get(key)
            .unwrap()
            .children()
            .iter()
            .map(|c| (c.name().to_string(), c.value().unwrap_or("").to_string()))
            .collect()
    }

    #[test]
    fn nothing() {
        let mut root = Node::new("root");
        let option = Opt::valued("--model", Slot::string("path"), "Model", "");

        Action::Nothing.perform(&mut root, &option, "abc", &["abc".to_string()]);

        assert_eq!(root, Node::new("root"));
    }

    #[test]
    fn store_values_single() {
        // Setup
        let mut root = Node::new("root");
        let option = Opt::valued("--model", Slot::string("path"), "Model", "");

        // Execute
        Action::StoreValues.perform(&mut root, &option, "a.bin", &["a.bin".to_string()]);

        // Verify
        assert_eq!(root.get("Model").unwrap().value(), Some("a.bin"));
        assert_eq!(
            children(&root, "Model"),
            vec![("path".to_string(), "a.bin".to_string())]
        );
    }

    #[test]
    fn store_values_replaces_children() {
        // Setup
        let mut root = Node::new("root");
        let option = Opt::multivalued(
            "--range",
            vec![Slot::integer("low"), Slot::string("direction")],
            "Range",
            "",
        );
        Action::StoreValues.perform(
            &mut root,
            &option,
            "1,west",
            &["1".to_string(), "west".to_string()],
        );

        // Execute
        Action::StoreValues.perform(
            &mut root,
            &option,
            "42,east",
            &["42".to_string(), "east".to_string()],
        );

        // Verify
        assert_eq!(root.get("Range").unwrap().value(), Some("42,east"));
        assert_eq!(
            children(&root, "Range"),
            vec![
                ("low".to_string(), "42".to_string()),
                ("direction".to_string(), "east".to_string()),
            ]
        );
    }

    #[test]
    fn store_values_count_mismatch() {
        // Setup
        let mut root = Node::new("root");
        let option = Opt::multivalued(
            "--range",
            vec![Slot::integer("low"), Slot::string("direction")],
            "Range",
            "",
        );
        Action::StoreValues.perform(
            &mut root,
            &option,
            "1,west",
            &["1".to_string(), "west".to_string()],
        );

        // Execute
        Action::StoreValues.perform(&mut root, &option, "1", &["1".to_string()]);

        // Verify
        assert_eq!(root.get("Range").unwrap().value(), Some("1"));
        assert!(children(&root, "Range").is_empty());
    }

    #[test]
    fn store_constants() {
        // Setup
        let mut root = Node::new("root");
        let option = Opt::default_multivalued(
            "--size",
            vec![Slot::integer("width"), Slot::integer("height")],
            "640x480",
            "Size",
            "",
        )
        .with_delimiter('x');

        // Execute
        Action::StoreConstants("640x480".to_string()).perform(&mut root, &option, "", &[]);

        // Verify
        assert_eq!(root.get("Size").unwrap().value(), Some("640x480"));
        assert_eq!(
            children(&root, "Size"),
            vec![
                ("width".to_string(), "640".to_string()),
                ("height".to_string(), "480".to_string()),
            ]
        );
    }

    #[rstest]
    #[case("true", "false")]
    #[case("false", "true")]
    #[case("yes", "false")]
    #[case("off", "true")]
    #[case("1", "false")]
    #[case("0", "true")]
    fn store_inverted_bool(#[case] value: &str, #[case] expected: &str) {
        // Setup
        let mut root = Node::new("root");
        let option = Opt::complement_switch("--quiet", "Verbose", "");

        // Execute
        Action::StoreInvertedBool.perform(&mut root, &option, value, &[value.to_string()]);

        // Verify
        assert_eq!(root.get("Verbose").unwrap().value(), Some(expected));
        assert_eq!(
            children(&root, "Verbose"),
            vec![("value".to_string(), expected.to_string())]
        );
    }

    #[test]
    #[should_panic(expected = "inverted boolean requires exactly one slot")]
    fn store_inverted_bool_multi_slot() {
        let mut root = Node::new("root");
        let option = Opt::multivalued(
            "--pair",
            vec![Slot::boolean("a"), Slot::boolean("b")],
            "Pair",
            "",
        );

        Action::StoreInvertedBool.perform(
            &mut root,
            &option,
            "true,true",
            &["true".to_string(), "true".to_string()],
        );
    }
}
