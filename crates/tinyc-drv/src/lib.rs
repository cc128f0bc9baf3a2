//! tinyc-drv - Command-line driver for the Tiny-C lexer
//!
//! The driver reads Tiny-C source files, runs the lexer over each one,
//! prints the token listing to standard output, and saves the same
//! listing next to the input (or under a chosen output directory) with
//! a `.lex` extension.
//!
//! Before scanning, each source is normalized: a single space is
//! prepended and every line is terminated with `\n`. With the scanner's
//! column rule this puts the first character of every line, the first
//! line included, at column 1.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Error, Result};
use tinyc_lex::{tokenize, Token, TokenKind};

/// Driver configuration assembled from the command line.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Source files to lex, in command-line order.
    pub input_files: Vec<PathBuf>,
    /// Directory for the `.lex` listings. `None` writes them next to
    /// the inputs.
    pub output_dir: Option<PathBuf>,
    /// Log progress to stderr.
    pub verbose: bool,
    /// `-h` / `--help` was given.
    pub help: bool,
    /// `-V` / `--version` was given.
    pub version: bool,
}

/// Parse command line arguments
pub fn parse_args() -> Result<Config, String> {
    let args: Vec<String> = env::args().collect();
    let mut config = Config::default();

    let mut i = 1;
    while i < args.len() {
        let arg = &args[i];

        if arg == "--help" || arg == "-h" {
            config.help = true;
            return Ok(config);
        } else if arg == "--version" || arg == "-V" {
            config.version = true;
            return Ok(config);
        } else if arg == "--verbose" || arg == "-v" {
            config.verbose = true;
        } else if arg == "--output" || arg == "-o" {
            if i + 1 >= args.len() {
                return Err("Missing argument for -o".to_string());
            }
            i += 1;
            config.output_dir = Some(PathBuf::from(&args[i]));
        } else if arg.starts_with('-') {
            return Err(format!("Unknown option: {}", arg));
        } else {
            config.input_files.push(PathBuf::from(arg));
        }
        i += 1;
    }

    Ok(config)
}

/// Print help message
pub fn print_help() {
    println!("Tiny-C Lexer v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: tinyc [OPTIONS] <input files>");
    println!();
    println!("Options:");
    println!("  -h, --help           Print this help message");
    println!("  -V, --version        Print version information");
    println!("  -v, --verbose        Enable verbose output");
    println!("  -o, --output <DIR>   Write token listings into <DIR>");
    println!();
    println!("Examples:");
    println!("  tinyc count.tc              Print and save the token listing");
    println!("  tinyc -o build count.tc     Save the listing under build/");
    println!("  tinyc -v count.tc           Lex with verbose output");
}

/// Print version information
pub fn print_version() {
    println!("tinyc {}", env!("CARGO_PKG_VERSION"));
}

/// Prepares raw file contents for the scanner.
///
/// A single space is prepended and every line, the last one included,
/// is terminated with `\n`. Carriage returns at line ends are dropped.
pub fn normalize_source(raw: &str) -> String {
    let mut source = String::with_capacity(raw.len() + 2);
    source.push(' ');
    for line in raw.lines() {
        source.push_str(line);
        source.push('\n');
    }
    source
}

/// Renders one token as a listing line.
///
/// The columns are fixed width: line and column right-aligned to 5,
/// then the kind name left-aligned to 15. Integers append their text
/// right-aligned to 4 more columns, identifiers append a space and
/// their spelling, strings append a space and their body in double
/// quotes.
pub fn render_token(token: &Token) -> String {
    let mut line = format!("{:>5}  {:>5} {:<15}", token.line, token.column, token.kind);
    match token.kind {
        TokenKind::Integer => line.push_str(&format!("  {:>4}", token.text)),
        TokenKind::Identifier => line.push_str(&format!(" {}", token.text)),
        TokenKind::String => line.push_str(&format!(" \"{}\"", token.text)),
        _ => {}
    }
    line
}

/// Renders a whole token listing. Lines are joined with `\n` and the
/// end-of-input line is not followed by one.
pub fn render_listing(tokens: &[Token]) -> String {
    let mut out = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&render_token(token));
    }
    out
}

/// Where the listing for `input` is written.
pub fn listing_path(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    match output_dir {
        Some(dir) => {
            let mut name = input
                .file_name()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("out"));
            name.set_extension("lex");
            dir.join(name)
        }
        None => input.with_extension("lex"),
    }
}

/// A source file with its normalized contents.
pub struct SourceFile {
    /// Path the file was read from.
    pub path: PathBuf,
    /// Normalized source text.
    pub content: String,
}

/// A driver session over a set of input files.
pub struct Session {
    config: Config,
    sources: Vec<SourceFile>,
}

impl Session {
    /// Reads and normalizes every input file named in `config`.
    pub fn new(config: Config) -> Result<Self> {
        let mut sources = Vec::new();
        for path in &config.input_files {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("cannot read {}", path.display()))?;
            sources.push(SourceFile {
                path: path.clone(),
                content: normalize_source(&raw),
            });
        }
        Ok(Session { config, sources })
    }

    /// Lexes every source, printing each listing to stdout and saving
    /// it as a `.lex` file. Stops at the first file that fails.
    pub fn run(&self) -> Result<()> {
        if let Some(dir) = &self.config.output_dir {
            fs::create_dir_all(dir)
                .with_context(|| format!("cannot create {}", dir.display()))?;
        }

        for source in &self.sources {
            if self.config.verbose {
                eprintln!("[verbose] Lexing: {}", source.path.display());
            }

            let tokens = tokenize(&source.content)
                .map_err(|e| anyhow!("{}: {}", source.path.display(), e))?;
            let listing = render_listing(&tokens);
            println!("{}", listing);

            let out_path = listing_path(&source.path, self.config.output_dir.as_deref());
            fs::write(&out_path, &listing)
                .with_context(|| format!("cannot write {}", out_path.display()))?;

            if self.config.verbose {
                eprintln!(
                    "[verbose] Wrote {} tokens to {}",
                    tokens.len(),
                    out_path.display()
                );
            }
        }

        Ok(())
    }
}

/// Entry point shared with the `tinyc` binary.
pub fn main() -> Result<()> {
    let config = parse_args().map_err(Error::msg)?;

    if config.help {
        print_help();
        return Ok(());
    }

    if config.version {
        print_version();
        return Ok(());
    }

    if config.input_files.is_empty() {
        bail!("no input files");
    }

    let session = Session::new(config)?;
    session.run()
}
