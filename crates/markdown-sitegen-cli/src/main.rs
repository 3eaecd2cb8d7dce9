use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use markdown_sitegen_config::Config;
use markdown_sitegen_engine::{SiteLayout, build_site};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "markdown-sitegen")]
#[command(version)]
#[command(about = "Build a static HTML site from a tree of markdown files")]
struct Cli {
    /// Project root containing sitegen.toml, content/, static/ and template.html
    #[arg(default_value = ".")]
    project: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,

    /// Config file to use instead of <project>/sitegen.toml
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output directory, overriding the configured one
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Skip pages that fail to convert instead of aborting
    #[arg(long)]
    skip_invalid: bool,

    /// Log per-file detail
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a default sitegen.toml into the project root
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match cli.command {
        Some(Command::Init { force }) => init(&cli.project, force),
        None => build(&cli),
    }
}

fn init(project: &Path, force: bool) -> Result<()> {
    let config_path = Config::config_path(project);
    if config_path.exists() && !force {
        bail!(
            "Config file already exists at {} (use --force to overwrite)",
            config_path.display()
        );
    }

    Config::default().save_to_path(&config_path)?;
    log::info!("Wrote default config to {}", config_path.display());
    Ok(())
}

fn build(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let layout = site_layout(cli, config.resolve(&cli.project));

    let report = build_site(&layout)
        .with_context(|| format!("Failed to build site in {}", cli.project.display()))?;

    for skipped in &report.pages_skipped {
        log::warn!("Skipped {skipped}");
    }
    println!(
        "Built {} page(s) into {}",
        report.pages_written.len(),
        layout.output_dir.display()
    );
    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| Config::config_path(&cli.project));
    log::debug!("Config path: {}", config_path.display());

    match Config::load_from_path(&config_path)? {
        Some(config) => Ok(config),
        None if cli.config.is_some() => {
            bail!("Config file not found at {}", config_path.display())
        }
        None => {
            log::info!("No config file found, using default layout");
            Ok(Config::default())
        }
    }
}

/// Applies command-line overrides on top of an already resolved config.
fn site_layout(cli: &Cli, config: Config) -> SiteLayout {
    SiteLayout {
        content_dir: config.content_dir,
        static_dir: config.static_dir,
        template_path: config.template_path,
        output_dir: cli.output.clone().unwrap_or(config.output_dir),
        skip_invalid_pages: cli.skip_invalid || config.skip_invalid_pages,
    }
}
