use clap::{Parser, Subcommand};
use clean_pantry::{config, generate, output, scan, taxonomy};
use std::fs;
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
#[command(name = "clean-pantry")]
#[command(about = "Static site generator for a DIY cleaning-recipe catalog")]
#[command(long_about = "\
Static site generator for a DIY cleaning-recipe catalog

Content is markdown with YAML frontmatter, validated against per-kind
schemas at build time and rendered into a static HTML site with schema.org
linked data and a client-side search index.

Content structure:

  content/
  ├── site.toml                    # Site config (optional)
  ├── recipes/
  │   └── kitchen/                 # Optional category directory
  │       └── all-purpose-cleaner.md
  ├── guides/
  │   └── cleaning-vinegar.md
  ├── ingredients/
  │   └── baking-soda.md
  └── pages/
      └── about.md

Recipes carry difficulty, durations, yield, and an ingredient list in their
frontmatter, plus '## Steps' and '## Why It Works' sections in the body.
Ingredient references carry a core/secondary/specialty tier and the
'## What It Does' / '## How to Use It' / '## Buying & Storage' sections.

Run 'clean-pantry gen-config' to print a documented site.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for the intermediate manifest
    #[arg(long, default_value = ".clean-pantry-temp", global = true)]
    temp_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate the content directory into a manifest
    Scan,
    /// Produce the HTML site from a previously scanned manifest
    Generate,
    /// Run the full pipeline: scan → generate
    Build,
    /// Validate content without building; also reports taxonomy drift
    Check,
    /// Print a stock site.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Scan => {
            let manifest = scan::scan(&cli.source)?;
            fs::create_dir_all(&cli.temp_dir)?;
            let manifest_path = cli.temp_dir.join("manifest.json");
            let json = serde_json::to_string_pretty(&manifest)?;
            fs::write(&manifest_path, json)?;
            output::print_scan_output(&manifest, &cli.source);
        }
        Command::Generate => {
            let manifest_path = cli.temp_dir.join("manifest.json");
            generate::generate(&manifest_path, &cli.output)?;
            let manifest: scan::Manifest =
                serde_json::from_str(&fs::read_to_string(&manifest_path)?)?;
            output::print_generate_output(&manifest);
        }
        Command::Build => {
            println!("==> Stage 1: Scanning {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            fs::create_dir_all(&cli.temp_dir)?;
            let manifest_path = cli.temp_dir.join("manifest.json");
            let json = serde_json::to_string_pretty(&manifest)?;
            fs::write(&manifest_path, json)?;
            output::print_scan_output(&manifest, &cli.source);

            println!("==> Stage 2: Generating HTML → {}", cli.output.display());
            generate::generate_site(&manifest, &cli.output)?;
            output::print_generate_output(&manifest);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            output::print_scan_output(&manifest, &cli.source);
            for gap in taxonomy::grouping_gaps() {
                println!("warning: {gap}");
            }
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
