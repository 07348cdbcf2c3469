use declopt::{Action, CommandLineParser, Node, Opt, Slot};

fn main() {
    let parser = CommandLineParser::new()
        .add(
            Opt::default_multivalued(
                "--size",
                vec![Slot::integer_range("width", 1, 7680), Slot::integer_range("height", 1, 4320)],
                "640x480",
                "Frame.Size",
                "Frame size, in pixels.",
            )
            .with_delimiter('x'),
        )
        .add(Opt::default_multivalued(
            "--origin",
            vec![Slot::integer("x"), Slot::integer("y")],
            "0,0",
            "Frame.Origin",
            "Top left corner of the frame.",
        ))
        .add(
            Opt::new("--landscape", "Frame.Orientation", "Rotate the frame into landscape.")
                .on_found(Action::StoreConstants("landscape".to_string()))
                .on_missing(Action::StoreConstants("portrait".to_string()))
                .with_default_description("portrait"),
        )
        .add(Opt::help())
        .build();

    // Parse into an existing tree, alongside values from elsewhere.
    let mut config = Node::new("Geometry");
    config.set("Frame.Name", "demo");
    let args: Vec<String> = std::env::args().collect();
    let state = parser.parse_tokens(&mut config, args.as_slice());

    if let Some(code) = state.exit_code() {
        std::process::exit(code);
    }

    let frame = config.get("Frame").map(Node::children).unwrap_or_default();
    for node in frame {
        let parts: Vec<String> = node
            .children()
            .iter()
            .map(|child| format!("{}={}", child.name(), child.value().unwrap_or("")))
            .collect();
        println!("{}: {} {:?}", node.name(), node.value().unwrap_or(""), parts);
    }
}
