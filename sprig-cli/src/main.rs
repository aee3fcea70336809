//! Sprig CLI
//!
//! Parses an HTML fragment and prints the resulting tree.

mod json;

use std::fs;
use std::process;

use clap::Parser as _;
use owo_colors::OwoColorize;
use sprig_common::warning::warn_once;
use sprig_html::{Parser, TraceEvent, print_forest};

/// Sprig — lenient HTML fragment parser
#[derive(clap::Parser, Debug)]
#[command(name = "sprig")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Print the tree of a file
    sprig ./fragment.html

    # Parse inline HTML
    sprig --html '<p class=x>Hello</p>'

    # Dump as JSON and show each token on stderr
    sprig --json --trace ./fragment.html
"#)]
struct Cli {
    /// Path to an HTML file
    #[arg(value_name = "FILE", required_unless_present = "html")]
    path: Option<String>,

    /// Parse HTML string directly instead of a file
    #[arg(long, value_name = "HTML", conflicts_with = "path")]
    html: Option<String>,

    /// Print the tree as JSON
    #[arg(long)]
    json: bool,

    /// Print every recognized token to stderr
    #[arg(long)]
    trace: bool,
}

/// Read the input named by the CLI arguments.
fn load_input(cli: &Cli) -> anyhow::Result<String> {
    if let Some(ref html) = cli.html {
        Ok(html.clone())
    } else if let Some(ref path) = cli.path {
        fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read '{path}': {e}"))
    } else {
        anyhow::bail!("No input: pass a file path or --html")
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let html = load_input(&cli)?;

    let trace = cli.trace;
    let parser = Parser::new(html).with_tracer(move |event: &TraceEvent<'_>| match event {
        TraceEvent::MismatchedEndTag { .. } => warn_once("HTML", &event.to_string()),
        _ if trace => eprintln!("{}", event.to_string().dimmed()),
        _ => {}
    });

    let tree = match parser.parse() {
        Ok(tree) => tree,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            process::exit(1);
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&json::forest(&tree))?);
    } else {
        print_forest(&tree);
    }

    Ok(())
}
