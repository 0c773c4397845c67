// huffman_coding_demo/src/main.rs

use std::fmt::Debug;
use std::fs;
use std::path::PathBuf;
use std::string::FromUtf8Error;

use clap::Parser;
use huffman_coding::{build_tree, count_frequencies, encoded_bit_length, extract_codes};
use tracing::info;
use tracing_subscriber::EnvFilter;

const SAMPLE_TEXT: &str = "Hello World! No tressspassing! What do you want from me?";

#[derive(Parser, Debug)]
#[command(name = "huffman_coding_demo")]
#[command(about = "Prints the Huffman code of every symbol in a text", long_about = None)]
struct Cli {
    /// Text to encode
    #[arg(default_value = SAMPLE_TEXT, conflicts_with = "input")]
    text: String,

    /// Read the text from a file instead
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Count raw bytes instead of characters
    #[arg(long)]
    bytes: bool,

    /// Also print the tree structure
    #[arg(long)]
    tree: bool,
}

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not valid UTF-8 (try --bytes): {}", .path.display(), .source)]
    Utf8 {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },
}

/// How a symbol is written in the code table.
trait SymbolLabel {
    fn label(&self) -> String;
}

impl SymbolLabel for char {
    fn label(&self) -> String {
        self.to_string()
    }
}

impl SymbolLabel for u8 {
    fn label(&self) -> String {
        format!("0x{:02X}", self)
    }
}

/// Loads the input as raw bytes, from the file if one was given.
fn load_input(cli: &Cli) -> Result<Vec<u8>, DemoError> {
    match &cli.input {
        Some(path) => fs::read(path).map_err(|source| DemoError::Io {
            path: path.clone(),
            source,
        }),
        None => Ok(cli.text.clone().into_bytes()),
    }
}

/// Interprets loaded input as text, rejecting invalid UTF-8 instead of
/// replacing it.
fn decode_text(cli: &Cli, input: Vec<u8>) -> Result<String, DemoError> {
    String::from_utf8(input).map_err(|source| DemoError::Utf8 {
        path: cli.input.clone().unwrap_or_default(),
        source,
    })
}

/// Renders the code table: a size line, one line per symbol, then the bit total.
///
/// # Arguments
///
/// * `symbols` - The symbols to encode.
/// * `show_tree` - Whether to print the tree structure first.
fn render<S, I>(symbols: I, show_tree: bool) -> String
where
    S: Ord + Clone + Debug + SymbolLabel,
    I: IntoIterator<Item = S>,
{
    let frequencies = count_frequencies(symbols);
    let tree = build_tree(&frequencies);
    let codes = extract_codes(tree.as_ref());

    let mut out = String::new();
    if show_tree {
        if let Some(tree) = &tree {
            out.push_str(&tree.to_string());
        }
    }
    out.push_str(&format!("size: {}\n", codes.len()));
    for (symbol, code) in &codes {
        out.push_str(&format!(
            "{}: {}\t occurrences: {}\n",
            symbol.label(),
            code,
            frequencies[symbol]
        ));
    }
    out.push_str(&format!(
        "encoded length: {} bits\n",
        encoded_bit_length(&frequencies, &codes)
    ));
    out
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let input = load_input(&cli)?;
    info!(bytes = input.len(), "input loaded");

    let output = if cli.bytes {
        render(input.iter().copied(), cli.tree)
    } else {
        render(decode_text(&cli, input)?.chars(), cli.tree)
    };
    print!("{}", output);

    Ok(())
}
