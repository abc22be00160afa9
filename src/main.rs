use clap::{Parser, Subcommand};
use simple_folio::{config, content, generate, output};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "simple-folio")]
#[command(about = "Static site generator for single-page personal portfolios")]
#[command(long_about = "\
Static site generator for single-page personal portfolios

One TOML file is the data source. The build turns it into a self-contained
page: sticky header, hero, projects, experience, skills, publications, and
contact sections, with a dark/light toggle and entrance animations.

Content structure:

  content/
  ├── portfolio.toml               # All page content (required)
  ├── config.toml                  # Colors, theme, animation (optional, partial)
  └── assets/                      # Static assets (resume PDF, favicon) → copied to output root
      └── cv.pdf

Output:

  dist/
  ├── index.html                   # The whole page — CSS and JS embedded
  ├── manifest.webmanifest         # Install metadata
  └── cv.pdf                       # Copied assets

Run 'simple-folio gen-content' and 'simple-folio gen-config' to generate
documented starting files.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the site: load content and config, write the page
    Build,
    /// Validate content and config without building
    Check,
    /// Print a stock portfolio.toml with all fields documented
    GenContent,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let portfolio = content::load_content(&cli.source)?;
            let site_config = config::load_config(&cli.source)?;
            let report = generate::generate(&portfolio, &site_config, &cli.source, &cli.output)?;
            output::print_build_output(&report, &portfolio);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let portfolio = content::load_content(&cli.source)?;
            config::load_config(&cli.source)?;
            output::print_check_output(&portfolio);
            println!("==> Content is valid");
        }
        Command::GenContent => {
            print!("{}", content::stock_content_toml());
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
