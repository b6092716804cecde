//! flowmap CLI entry point.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use flowmap::{FlowConfig, InputFormat, RenderOptions, View, render_bytes};

/// Fund-flow tables to account hierarchies, layer lists and layer-map SVG.
#[derive(Parser, Debug)]
#[command(
    name = "flowmap",
    version = env!("FLOWMAP_VERSION"),
    about = "Fund-flow tables to account hierarchies, layer lists and layer-map SVG"
)]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Input format: csv, tsv, json or xlsx (default: from the file extension, else sniffed)
    #[arg(short = 'f', long = "format")]
    format: Option<String>,

    /// Output view: tree, layers, canvas, json or details
    #[arg(short = 'v', long = "view", default_value = "tree")]
    view: String,

    /// Expand this layer on the canvas (repeatable)
    #[arg(short = 'e', long = "expand", value_name = "LAYER", allow_negative_numbers = true)]
    expand: Vec<i64>,

    /// Expand every layer on the canvas
    #[arg(long = "expand-all")]
    expand_all: bool,

    /// Collapse this layer in the layer list (repeatable)
    #[arg(short = 'c', long = "collapse", value_name = "LAYER", allow_negative_numbers = true)]
    collapse: Vec<i64>,

    /// Account to select on the canvas or to describe with the details view
    #[arg(long = "node", value_name = "ID")]
    node: Option<String>,

    /// Use plain ASCII instead of Unicode tree-drawing characters
    #[arg(short = 'a', long = "ascii")]
    use_ascii: bool,

    /// TOML file overriding layout, viewport and render settings
    #[arg(long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<String>,
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

fn main() {
    let cli = Cli::parse();

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    // Read input from file or stdin
    let input = if let Some(ref path) = cli.input {
        match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => fail(format!("cannot read '{}': {}", path.display(), e)),
        }
    } else {
        let mut buf = Vec::new();
        if let Err(e) = io::stdin().read_to_end(&mut buf) {
            fail(format!("cannot read stdin: {}", e));
        }
        buf
    };

    let format = match cli.format.as_deref() {
        Some(name) => name.parse::<InputFormat>().unwrap_or_else(|e| fail(e)),
        None => cli
            .input
            .as_deref()
            .and_then(InputFormat::from_path)
            .unwrap_or_else(|| InputFormat::sniff(&input)),
    };
    let view = cli.view.parse::<View>().unwrap_or_else(|e| fail(e));

    let mut config = match cli.config {
        Some(ref path) => FlowConfig::load(path).unwrap_or_else(|e| {
            fail(format!("cannot load config '{}': {}", path.display(), e))
        }),
        None => FlowConfig::default(),
    };
    if cli.use_ascii {
        config.render.unicode = false;
    }

    let options = RenderOptions {
        format,
        view,
        expand: cli.expand,
        expand_all: cli.expand_all,
        collapse: cli.collapse,
        node: cli.node,
        config,
    };
    let rendered = render_bytes(&input, &options).unwrap_or_else(|e| fail(e));

    // Write output to file or stdout
    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, rendered) {
            fail(format!("cannot write '{}': {}", path, e));
        }
    } else {
        print!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            fail(format!("cannot flush stdout: {}", e));
        }
    }
}
