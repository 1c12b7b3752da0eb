//! CLI entry point for arbor

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use arbor::{OutputFormat, RenderConfig, render};

#[derive(Parser, Debug)]
#[command(name = "arbor")]
#[command(about = "Render directory hierarchies as text, XML, or JSON")]
#[command(version)]
struct Args {
    /// Directories to display
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// List directories only
    #[arg(short = 'd', long = "dirs-only")]
    dirs_only: bool,

    /// Print each entry's path from its root instead of the bare name
    #[arg(short = 'f', long = "full-path")]
    full_path: bool,

    /// Omit connector and indentation glyphs (flat listing)
    #[arg(short = 'i', long = "no-indent")]
    no_indent: bool,

    /// Descend only N levels deep
    #[arg(
        short = 'L',
        long = "level",
        value_name = "N",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    level: Option<u64>,

    /// Show a permission string ahead of each entry
    #[arg(short = 'p', long = "permissions")]
    permissions: bool,

    /// Sort siblings by modification time instead of directory order
    #[arg(short = 't', long = "sort-mtime")]
    sort_mtime: bool,

    /// Output in XML format
    #[arg(short = 'X', long = "xml", conflicts_with = "json")]
    xml: bool,

    /// Output in JSON format
    #[arg(short = 'J', long = "json", conflicts_with = "xml")]
    json: bool,

    /// Enable verbose diagnostics. Use -v for info, -vv for debug, -vvv for trace.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn format(&self) -> OutputFormat {
        if self.xml {
            OutputFormat::Xml
        } else if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Plain
        }
    }
}

fn main() {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(log_level).init();

    let roots = if args.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        args.paths.clone()
    };

    let config = RenderConfig {
        only_directories: args.dirs_only,
        relative_paths: args.full_path,
        show_permissions: args.permissions,
        sort_by_mtime: args.sort_mtime,
        no_indent: args.no_indent,
        format: args.format(),
        max_depth: args.level.map(|n| n as usize),
        roots,
    };

    println!("{}", render(&config));
}
