use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use refine_core::{
    example::capacity_validation_example, load_refined_issue, resolve_input_format, InputFormat,
    RefinedIssue,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "refine")]
#[command(about = "Render refined issues as markdown")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the built-in example refinement
    Example {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
        format: OutputFormat,
        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Render a refined issue from a YAML or JSON file
    Render {
        /// Path to the issue file
        path: PathBuf,
        /// Input format (defaults to the file extension)
        #[arg(long, value_enum)]
        format: Option<SourceFormat>,
        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Markdown,
    Yaml,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum SourceFormat {
    Yaml,
    Json,
}

impl From<SourceFormat> for InputFormat {
    fn from(format: SourceFormat) -> Self {
        match format {
            SourceFormat::Yaml => InputFormat::Yaml,
            SourceFormat::Json => InputFormat::Json,
        }
    }
}

/// Entry point for the `refine` CLI.
///
/// Logs go to stderr so stdout only ever carries the document.
///
/// # Environment Variables
/// - `RUST_LOG`: tracing filter (default directive: "refine=info")
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("refine=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Example { format, output }) => {
            let issue = capacity_validation_example();
            let content = match format {
                OutputFormat::Markdown => issue.render(),
                OutputFormat::Yaml => issue.to_yaml_string()?,
                OutputFormat::Json => issue.to_json_string()?,
            };
            emit(&content, output.as_deref())?;
        }
        Some(Commands::Render {
            path,
            format,
            output,
        }) => {
            let issue = load(&path, format)?;
            emit(&issue.render(), output.as_deref())?;
        }
        None => {
            println!("Use 'refine --help' for commands");
        }
    }

    Ok(())
}

/// Resolves the input format for `path` and loads the issue it contains.
fn load(path: &Path, format: Option<SourceFormat>) -> anyhow::Result<RefinedIssue> {
    let format = resolve_input_format(path, format.map(InputFormat::from))?;
    load_refined_issue(path, format).with_context(|| format!("failed to load {}", path.display()))
}

/// Writes the content to `output`, or to stdout when no file is given.
fn emit(content: &str, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .map_err(refine_core::IssueError::FileWrite)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("++ Wrote {} bytes to {}", content.len(), path.display());
        }
        None => {
            print!("{}", content);
            if !content.ends_with('\n') {
                println!();
            }
        }
    }
    Ok(())
}
