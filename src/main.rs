use clap::{Parser, Subcommand};
use scriptorium::{config, convert, output};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "scriptorium")]
#[command(about = "Convert JSON prayers, psalms and Bible books into Markdown")]
#[command(long_about = "\
Convert JSON prayers, psalms and Bible books into Markdown

Every *.json file in the input folder holds either an array of prayer/psalm
records or a single record. A single object with \"type\": \"bible_book\" is a
whole book with chapters. Each language text becomes its own file:

  молитвы/<id>/ru.md                          # prayers
  псалтирь/<id>/uk.md                         # psalms, or \"Псалтирь\" category
  библия/<testament>/<book>/chapter-01/ru.md  # Bible chapters

Existing files are overwritten. Run with no arguments to convert using the
defaults, or 'scriptorium gen-config' for a documented config file.")]
#[command(version)]
struct Cli {
    /// Folder with *.json input files
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// Root of the generated Markdown tree
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Config file (default: ./scriptorium.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Convert all input files (the default)
    Convert,
    /// Show what would be written without writing anything
    Check,
    /// Print a stock scriptorium.toml with all options documented
    GenConfig,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.as_ref().unwrap_or(&Command::Convert) {
        Command::Convert => {
            let config = resolve_config(&cli)?;
            println!(
                "==> Converting {} → {}",
                config.input_dir.display(),
                config.output_dir.display()
            );

            let (tx, rx) = std::sync::mpsc::channel();
            let printer_config = config.clone();
            let printer = std::thread::spawn(move || {
                for event in rx {
                    for line in output::format_convert_event(&event, &printer_config) {
                        println!("{}", line);
                    }
                }
            });
            let outcome = convert::run(&config, Some(tx))?;
            printer
                .join()
                .map_err(|_| "progress printer thread panicked")?;

            output::print_outcome(&outcome);
            if matches!(&outcome, convert::Outcome::Completed(s) if s.has_failures()) {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Check => {
            let config = resolve_config(&cli)?;
            println!("==> Checking {}", config.input_dir.display());
            let checks = convert::check(&config)?;
            output::print_check_output(&checks, &config);
            if checks.iter().any(|c| c.plan.is_err()) {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Load the config file (explicit or the default name) and apply CLI overrides.
fn resolve_config(cli: &Cli) -> Result<config::Config, config::ConfigError> {
    let mut config = match &cli.config {
        Some(path) if !path.exists() => {
            return Err(config::ConfigError::Validation(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        Some(path) => config::load_config(path)?,
        None => config::load_config(std::path::Path::new(config::CONFIG_FILE_NAME))?,
    };
    if let Some(input) = &cli.input {
        config.input_dir = input.clone();
    }
    if let Some(output) = &cli.output {
        config.output_dir = output.clone();
    }
    Ok(config)
}
