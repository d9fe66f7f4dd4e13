//! `canvas-render` — render a component page to HTML.
//!
//! Usage:
//!   canvas-render [--config registry.toml] [--strict] [--indent '  ']
//!                 [--fallback-tag div] [page.json]
//!
//! The page is read from the given file, or from stdin when no file is
//! given. Log verbosity follows `RUST_LOG` (default `warn`).

use canvas_tree::cli::{render_page, CliError};
use canvas_tree::config::RendererConfig;
use clap::Parser;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "canvas-render", version, about = "Render a component page to HTML")]
struct Args {
    /// Page JSON; stdin when omitted.
    input: Option<PathBuf>,

    /// Registry configuration (TOML).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Reject duplicate ids, dangling parents and parent cycles.
    #[arg(long)]
    strict: bool,

    /// Indentation unit; compact output when empty.
    #[arg(long, default_value = "")]
    indent: String,

    /// Fallback tag for unregistered component ids.
    #[arg(long)]
    fallback_tag: Option<String>,
}

fn run(args: Args) -> Result<String, CliError> {
    let mut config = match &args.config {
        Some(path) => RendererConfig::from_toml(&std::fs::read_to_string(path)?)?,
        None => RendererConfig::default(),
    };
    config.strict |= args.strict;
    if args.fallback_tag.is_some() {
        config.fallback_tag = args.fallback_tag;
    }
    config.validate()?;

    let json = match &args.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    render_page(json.trim(), &config, &args.indent)
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run(Args::parse()) {
        Ok(html) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{html}") {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
