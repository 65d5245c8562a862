// ABOUTME: CLI for the igps page helpers.
// ABOUTME: Renders HTML files to plain text and highlights table rows in HTML documents.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dom_query::Document;
use igps_pagekit::{
    decode_html, html_to_text_with, HighlightOptions, SelectionController, TextOptions,
};
use serde_json::json;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pagekit")]
#[command(about = "Render HTML to text and highlight table rows", long_about = None)]
struct Args {
    /// Log at debug level (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the rendered plain text of an HTML file
    Text {
        /// HTML file, or "-" for stdin
        #[arg(default_value = "-")]
        input: String,

        /// JSON file with text options (paragraph_spacing, cell_separator, skip_tags)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Wrap the output in a JSON object
        #[arg(long = "json")]
        json_output: bool,

        /// Output file path (default: stdout)
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,
    },

    /// Highlight the table row enclosing the first element matching a selector
    Highlight {
        /// HTML file, or "-" for stdin
        input: String,

        /// CSS selector of the element whose row should be highlighted
        #[arg(long = "select")]
        selector: String,

        /// Class applied to the highlighted row
        #[arg(long)]
        class: Option<String>,

        /// Tag of row elements
        #[arg(long)]
        row_tag: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(1)
        }
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Text {
            input,
            config,
            json_output,
            output,
        } => {
            let opts = match config {
                Some(path) => TextOptions::from_json(&read_config(&path)?)?,
                None => TextOptions::default(),
            };
            debug!(?opts, "text options");

            let text = html_to_text_with(&read_input(&input)?, &opts);
            let rendered = if json_output {
                serde_json::to_string_pretty(&json!({ "input": input, "text": text }))?
            } else {
                text
            };
            write_output(output.as_deref(), &rendered)
        }
        Command::Highlight {
            input,
            selector,
            class,
            row_tag,
            output,
        } => {
            let mut opts = HighlightOptions::default();
            if let Some(class) = class {
                opts = opts.highlight_class(class);
            }
            if let Some(tag) = row_tag {
                opts = opts.row_tag(tag);
            }

            let mut doc = Document::from(read_input(&input)?.as_str());
            let mut rows = SelectionController::with_options(opts);
            match rows.highlight_row_matching(&mut doc, &selector)? {
                Some(row) => debug!(?row, %selector, "row highlighted"),
                None => warn!(%selector, "no enclosing row found; nothing highlighted"),
            }
            write_output(output.as_deref(), &doc.html())
        }
    }
}

/// Reads HTML bytes from a file or stdin and decodes them whatever their charset.
fn read_input(target: &str) -> Result<String> {
    let bytes = if target == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf).context("reading stdin")?;
        buf
    } else {
        fs::read(target).with_context(|| format!("reading {}", target))?
    };
    Ok(decode_html(&bytes))
}

fn read_config(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
        }
        None => println!("{}", content),
    }
    Ok(())
}
