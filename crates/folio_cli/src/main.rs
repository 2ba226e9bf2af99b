//! Folio CLI
//!
//! Scaffold a site config, render headless snapshots of the page, and
//! inspect letter reveal timings.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use folio_app::SiteConfig;
use folio_layout::{HtmlRenderer, Node};
use folio_theme::{ColorScheme, FilePreference, ThemePreference};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod render;
mod timeline;

use render::RenderOptions;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Animated portfolio page renderer", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default site config
    Init {
        /// Config file to create
        #[arg(short, long, default_value = "folio.toml")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Render the page at a point in time
    Render {
        /// Site config (defaults are used when missing)
        #[arg(short, long, default_value = "folio.toml")]
        config: PathBuf,

        /// Viewport width in pixels
        #[arg(long, default_value = "1280")]
        width: f32,

        /// Viewport height in pixels
        #[arg(long, default_value = "800")]
        height: f32,

        /// Scroll offset in pixels
        #[arg(long, default_value = "0")]
        scroll: f32,

        /// Seconds of animation to run before the snapshot
        #[arg(short, long, default_value = "2")]
        time: f32,

        /// Simulated frame rate
        #[arg(long, default_value = "60")]
        fps: u32,

        /// Force a color scheme (light, dark)
        #[arg(long)]
        theme: Option<ColorScheme>,

        /// Theme preference file
        #[arg(long)]
        preference: Option<PathBuf>,

        /// Year shown in the footer
        #[arg(long)]
        year: Option<i32>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "html")]
        format: OutputFormat,

        /// Indent the output
        #[arg(long)]
        pretty: bool,

        /// Output path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print per-letter delays for a heading
    Timeline {
        /// Heading text
        text: String,

        /// Base delay in seconds
        #[arg(short, long, default_value = "0")]
        delay: f32,

        /// Stagger multiplier
        #[arg(short, long, default_value = "1")]
        multiplier: f32,
    },

    /// Show or toggle the stored theme preference
    Theme {
        /// Theme preference file
        #[arg(short, long, default_value = ".folio/theme.toml")]
        preference: PathBuf,

        /// Flip the stored scheme
        #[arg(short, long)]
        toggle: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Html,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Init { path, force } => cmd_init(&path, force),

        Commands::Render {
            config,
            width,
            height,
            scroll,
            time,
            fps,
            theme,
            preference,
            year,
            format,
            pretty,
            output,
        } => {
            let options = RenderOptions {
                width,
                height,
                scroll,
                time,
                fps,
                theme,
                preference,
                year,
            };
            cmd_render(&config, &options, format, pretty, output.as_deref())
        }

        Commands::Timeline {
            text,
            delay,
            multiplier,
        } => cmd_timeline(&text, delay, multiplier),

        Commands::Theme { preference, toggle } => cmd_theme(&preference, toggle),
    }
}

fn cmd_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite it.",
            path.display()
        );
    }

    let contents = SiteConfig::default().to_toml_string()?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Wrote {}", path.display());
    Ok(())
}

fn cmd_render(
    config_path: &Path,
    options: &RenderOptions,
    format: OutputFormat,
    pretty: bool,
    output: Option<&Path>,
) -> Result<()> {
    let config = SiteConfig::load_or_default(config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;
    let title = config.title.clone();

    info!(
        "Rendering {} at {}x{} (scroll {}, t={}s)",
        title, options.width, options.height, options.scroll, options.time
    );

    let page = render::simulate(config, options)?;
    let tree = page.render();

    let rendered = match format {
        OutputFormat::Html => {
            let renderer = if pretty {
                HtmlRenderer::new().pretty()
            } else {
                HtmlRenderer::new()
            };
            renderer.document(&title, page.theme().as_str(), &tree)
        }
        OutputFormat::Json => {
            if !pretty {
                warn!("JSON output is always indented");
            }
            folio_layout::to_json(&Node::from(tree)).context("Failed to encode the tree")?
        }
    };

    match output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

fn cmd_timeline(text: &str, delay: f32, multiplier: f32) -> Result<()> {
    let mut out = std::io::stdout().lock();
    let letters = timeline::write_timeline(&mut out, text, delay, multiplier)
        .context("Failed to write the timeline")?;
    debug!(letters, "timeline printed");
    Ok(())
}

fn cmd_theme(path: &Path, toggle: bool) -> Result<()> {
    let preference = FilePreference::open(path, ColorScheme::default())
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let mut scheme = preference.get_theme();
    if toggle {
        scheme = scheme.toggle();
        preference
            .set_theme(scheme)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Switched to {} mode", scheme);
    }

    println!("{}", scheme);
    Ok(())
}
