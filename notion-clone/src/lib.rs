// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::path::PathBuf;
use std::time::Duration;
use anyhow::{bail, Context, Result};
use application::{HomePage, PageViewer};
use infrastructure::{Config, ContentRenderer};
use ports::{HtmlPresenter, JsonPresenter};
use tracing::{debug, info};
use crate::cli::args::{Args, Command, Format};

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting notion-clone with arguments");

    match args.command {
        // `init PATH` wins over the global `--config` location
        Command::Init { path, force } => init_config(path.or(args.config), force),
        Command::View { json } => {
            let config = Config::resolve(args.config.as_deref())?;
            debug!(?config, "Resolved config");
            view_page(&config, json)
        }
        Command::Render { output, format } => {
            let config = Config::resolve(args.config.as_deref())?;
            debug!(?config, "Resolved config");
            let content = render_page(&config, format)?;
            match output {
                Some(path) => {
                    infrastructure::write_output(&path, &content)?;
                    info!(?path, ?format, "Rendered page written");
                }
                None => println!("{}", content.trim_end()),
            }
            Ok(())
        }
    }
}

/// Render the landing page in the requested format
pub fn render_page(config: &Config, format: Format) -> Result<String> {
    let viewer = PageViewer::new(HomePage::new());
    let tree = viewer.view_page();

    let presenter = HtmlPresenter::with_options(&config.page.title, config.page.stylesheet);
    match format {
        Format::Html => Ok(presenter.render(&tree)),
        Format::Fragment => Ok(presenter.render_fragment(&tree)),
        Format::Json => JsonPresenter::new().render(&tree),
    }
}

fn view_page(config: &Config, json: bool) -> Result<()> {
    if json {
        println!("{}", render_page(config, Format::Json)?);
        return Ok(());
    }

    let html = render_page(config, Format::Html)?;
    debug!(?html, "Generated HTML");

    // Create temporary file and open in browser
    let mut renderer =
        ContentRenderer::new(Duration::from_millis(config.browser.launch_delay_ms));
    let temp_path = renderer.create_temp_file(&html)?;
    info!(path = ?temp_path, "Opening landing page");
    renderer.open_in_browser(&temp_path)?;

    Ok(())
}

fn init_config(path: Option<PathBuf>, force: bool) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => Config::default_path().context("Could not find config directory")?,
    };

    if path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::create_default(&path)?;
    info!(?path, "Created default config");
    println!("{}", path.display());
    Ok(())
}
