use bella_italia::{assets, config, generate, output, showcase, sound};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bella-italia")]
#[command(about = "Static builder for the Bella Italia restaurant site")]
#[command(long_about = "\
Static builder for the Bella Italia restaurant site

Renders the one-page site (navbar, hero, about with the animated pizza,
menu, gallery, reservations, footer) into a single index.html and stages
the illustration assets next to it.

Source structure:

  site/
  ├── config.toml                    # Optional, see 'bella-italia gen-config'
  └── assets/
      ├── pizza-base.svg             # Required
      ├── images/ingredients/*.svg   # Required, one per topping
      └── sounds/*.mp3               # Optional, the page stays silent without them

Run 'bella-italia gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Site source directory
    #[arg(long, default_value = "site", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// More log output (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the site and stage its assets
    Build,
    /// Validate config and assets without writing anything
    Check,
    /// Print the ingredient schedule and sound cue times
    Timeline,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Build => {
            let config = config::load_config(&cli.source)?;
            println!(
                "==> Building {} \u{2192} {}",
                cli.source.display(),
                cli.output.display()
            );
            let report = generate::generate(&config, &cli.source, &cli.output)?;
            output::print_build(&report);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let config = config::load_config(&cli.source)?;
            let assets_dir = cli.source.join("assets");
            let expected = assets::expected_assets();
            let missing = assets::missing_assets(&assets_dir);
            output::print_check(&config, &cli.source, &expected, &missing);
            assets::check_assets(&assets_dir)?;
            println!("==> Site is valid");
        }
        Command::Timeline => {
            let config = config::load_config(&cli.source)?;
            let settings = showcase::ShowcaseSettings::from_config(&config);
            let probe = sound::AssetProbe::new(cli.source.join("assets"));
            let pizza = showcase::Showcase::new(probe, settings);
            let sequencer = pizza.sequencer();
            output::print_timeline(
                sequencer.descriptors(),
                sequencer.timing(),
                &pizza.cue_plan(),
                sequencer.completion(),
            );
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
