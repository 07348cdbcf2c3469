use declopt::{CommandLineParser, Opt, Slot};

fn main() {
    let parser = CommandLineParser::new()
        .add(
            Opt::valued(
                "--model",
                Slot::string("path"),
                "Model.Path",
                "Path to the model weights.",
            )
            .short("-m")
            .required(),
        )
        .add(Opt::valued(
            "--mmproj",
            Slot::string("path"),
            "Model.Projector",
            "Path to the multimodal projector weights.",
        ))
        .add(Opt::default_valued(
            "--host",
            Slot::string("host"),
            "localhost",
            "Server.Host",
            "Host to serve on.",
        ))
        .add(Opt::default_valued(
            "--port",
            Slot::integer_range("port", 1, 65535),
            "8080",
            "Server.Port",
            "Port to serve on.",
        ))
        .add(
            Opt::default_valued(
                "--threads",
                Slot::integer_range("count", 1, 256),
                "4",
                "Server.Threads",
                "Number of worker threads.",
            )
            .short("-t"),
        )
        .add(Opt::switch("--verbose", "Verbose", "Log every request.").short("-v"))
        .add(Opt::complement_switch("--quiet", "Verbose", "Log nothing but errors.").short("-q"))
        .add(Opt::help())
        .build();

    let result = parser.parse_env();

    if let Some(code) = result.state.exit_code() {
        std::process::exit(code);
    }

    let config = result.config;
    println!(
        "Serving '{}' on {}:{} with {} thread(s).",
        config.value_or("Model.Path", String::default()),
        config.value_or("Server.Host", String::default()),
        config.value_or("Server.Port", 0u64),
        config.value_or("Server.Threads", 0u64),
    );

    if config.value_or("Verbose", false) {
        println!("Verbose logging enabled.");
    }
}
