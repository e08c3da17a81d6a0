//! Binary entry point for the astkit CLI.
//!
//! Trees are exchanged as JSON documents (the serde form of
//! `astkit_ast::Mod`), so any external parser that emits that shape can
//! feed the renderer.
//!
//! ## Usage
//!
//! ```bash
//! # Render a tree to Python source
//! astkit render tree.json --python-version 2.7
//!
//! # List the node kinds of a dialect, optionally one family
//! astkit kinds --family stmt
//!
//! # Shift every position before splicing the tree into a larger file
//! astkit adjust tree.json --lines 10 --cols 4
//!
//! # Node-kind histogram
//! astkit count tree.json
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use astkit::ast::{
    accumulate, Family, KindCounter, KindIndex, Mod, PythonVersion, SourceRenderer,
};
use astkit::{
    AstkitError, Config, LocationAdjustProcessor, OutputErrorCode, ProcessorChain, RenderTap,
};

// ============================================================================
// CLI Structure
// ============================================================================

/// Render Python syntax trees back to source.
#[derive(Parser, Debug)]
#[command(name = "astkit", version, about = "Render Python syntax trees back to source")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Command,
}

/// Global arguments shared by all subcommands.
#[derive(Parser, Debug)]
struct GlobalArgs {
    /// Dialect to render: `permissive` or `<major>.<minor>`.
    ///
    /// Overrides `ASTKIT_PYTHON_VERSION` and the config file.
    #[arg(long, global = true)]
    python_version: Option<PythonVersion>,

    /// Config file (default: astkit.toml in the current directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (RUST_LOG takes precedence).
    #[arg(long, global = true, value_enum, default_value = "warn")]
    log_level: LogLevel,

    /// Log line format.
    #[arg(long, global = true, value_enum, default_value = "text")]
    log_format: LogFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn to_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    /// Human-readable lines (default).
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// CLI subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Render a JSON tree to Python source.
    Render {
        /// Tree file, or `-` for stdin.
        tree: PathBuf,
        /// Spaces per block level (overrides the config file).
        #[arg(long)]
        indent_width: Option<usize>,
        /// Write the source here instead of stdout.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// List node kinds available in the dialect.
    Kinds {
        /// Only list this family (e.g. `stmt`, `expr`, `operator`).
        #[arg(long)]
        family: Option<Family>,
    },
    /// Shift every recorded position and print the tree as JSON.
    Adjust {
        /// Tree file, or `-` for stdin.
        tree: PathBuf,
        /// Lines to add to every `lineno`.
        #[arg(long, default_value_t = 0)]
        lines: u32,
        /// Columns to add to every `col_offset`.
        #[arg(long, default_value_t = 0)]
        cols: u32,
        /// Render the adjusted tree to confirm it is valid in the dialect.
        #[arg(long)]
        check: bool,
    },
    /// Count nodes per kind.
    Count {
        /// Tree file, or `-` for stdin.
        tree: PathBuf,
    },
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Serialize)]
struct ErrorResponse {
    status: &'static str,
    code: u8,
    message: String,
}

#[derive(Debug, Serialize)]
struct KindsResponse {
    version: PythonVersion,
    families: Vec<FamilyEntry>,
}

#[derive(Debug, Serialize)]
struct FamilyEntry {
    family: String,
    kinds: Vec<KindEntry>,
}

#[derive(Debug, Serialize)]
struct KindEntry {
    name: &'static str,
    fields: &'static [&'static str],
}

#[derive(Debug, Serialize)]
struct CountResponse {
    total: usize,
    kinds: BTreeMap<String, usize>,
}

fn emit_json<T: Serialize>(response: &T, writer: &mut impl Write) -> Result<(), AstkitError> {
    serde_json::to_writer_pretty(&mut *writer, response)?;
    writeln!(writer)?;
    Ok(())
}

// ============================================================================
// Main
// ============================================================================

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.global.log_level, cli.global.log_format);

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let error_code = OutputErrorCode::from(&err);
            let response = ErrorResponse {
                status: "error",
                code: error_code.code(),
                message: err.to_string(),
            };
            // stdout only ever carries command results
            let _ = emit_json(&response, &mut io::stderr());
            ExitCode::from(error_code.code())
        }
    }
}

fn init_tracing(level: LogLevel, format: LogFormat) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_tracing_level().to_string()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr);
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

/// Execute the CLI command.
fn execute(cli: Cli) -> Result<(), AstkitError> {
    let config = Config::discover(cli.global.config.as_ref())?;
    match cli.command {
        Command::Render {
            tree,
            indent_width,
            output,
        } => execute_render(&cli.global, &config, &tree, indent_width, output.as_deref()),
        Command::Kinds { family } => execute_kinds(&cli.global, &config, family),
        Command::Adjust {
            tree,
            lines,
            cols,
            check,
        } => execute_adjust(&cli.global, &config, &tree, lines, cols, check),
        Command::Count { tree } => execute_count(&tree),
    }
}

// ============================================================================
// Command Executors
// ============================================================================

fn execute_render(
    global: &GlobalArgs,
    config: &Config,
    tree_path: &Path,
    indent_width: Option<usize>,
    output: Option<&Path>,
) -> Result<(), AstkitError> {
    let mut options = config.render_options(global.python_version)?;
    if let Some(width) = indent_width {
        if width == 0 {
            return Err(AstkitError::invalid_args("--indent-width must be at least 1"));
        }
        options = options.with_indent_width(width);
    }

    let tree = read_tree(tree_path)?;
    let source = SourceRenderer::with_options(options).render_module(&tree)?;

    match output {
        Some(path) => fs::write(path, &source).map_err(|e| AstkitError::from_io(path, e))?,
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(source.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn execute_kinds(
    global: &GlobalArgs,
    config: &Config,
    family: Option<Family>,
) -> Result<(), AstkitError> {
    let version = config.render_options(global.python_version)?.version;
    let index = KindIndex::build(version);

    let families = match family {
        Some(family) => vec![family],
        None => index.families(),
    };
    let response = KindsResponse {
        version,
        families: families
            .into_iter()
            .map(|family| FamilyEntry {
                family: family.to_string(),
                kinds: index
                    .leaves_of(family)
                    .into_iter()
                    .map(|kind| KindEntry {
                        name: kind.name(),
                        fields: kind.fields(),
                    })
                    .collect(),
            })
            .collect(),
    };
    emit_json(&response, &mut io::stdout())
}

fn execute_adjust(
    global: &GlobalArgs,
    config: &Config,
    tree_path: &Path,
    lines: u32,
    cols: u32,
    check: bool,
) -> Result<(), AstkitError> {
    let mut chain = ProcessorChain::new();
    chain.add(LocationAdjustProcessor::new(lines, cols));
    if check {
        chain.add(RenderTap::new(config.render_options(global.python_version)?));
    }

    let tree = chain.run(read_tree(tree_path)?)?;
    emit_json(&tree, &mut io::stdout())
}

fn execute_count(tree_path: &Path) -> Result<(), AstkitError> {
    let tree = read_tree(tree_path)?;
    let counts = accumulate(&tree, KindCounter::default());
    let response = CountResponse {
        total: counts.values().sum(),
        kinds: counts
            .into_iter()
            .map(|(kind, count)| (kind.name().to_string(), count))
            .collect(),
    };
    emit_json(&response, &mut io::stdout())
}

// ============================================================================
// Helpers
// ============================================================================

/// Read a JSON tree from `path`, or stdin when `path` is `-`.
fn read_tree(path: &Path) -> Result<Mod, AstkitError> {
    let content = if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(path).map_err(|e| AstkitError::from_io(path, e))?
    };
    let tree = serde_json::from_str(&content)?;
    tracing::debug!("read tree from {}", path.display());
    Ok(tree)
}

// ============================================================================
// Tests
// ============================================================================
