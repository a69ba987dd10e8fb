//! dburl - parse a database URL and print its components.

mod cli;
mod logging;

use cli::{Cli, OutputFormat};
use db_url::config::Config;
use db_url::error::{Error, Result};
use db_url::{parse, parse_partial};
use serde::Serialize;
use tracing::{error, info};

fn main() {
    // .env is optional; DATABASE_URL may come from it.
    dotenvy::dotenv().ok();

    let cli = Cli::parse_args();
    logging::init_stderr_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        error!("{}: {}", e.category(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config_path = cli.config_path();
    info!("Loading config from: {}", config_path.display());
    let config = Config::load_from_file(&config_path)?;

    let Some(url) = cli.resolve_url(&config)? else {
        return Err(Error::config(
            "No database URL given. Pass a URL, set DATABASE_URL, or use --connection",
        ));
    };

    if cli.partial || cli.env_defaults {
        let mut parsed = parse_partial(&url)?;
        if cli.env_defaults {
            parsed.apply_env_defaults();
        }

        if cli.partial {
            print_output(cli.output, &parsed, parsed.display_string())
        } else {
            let complete = parsed.into_complete()?;
            print_output(cli.output, &complete, complete.display_string())
        }
    } else {
        let parsed = parse(&url)?;
        print_output(cli.output, &parsed, parsed.display_string())
    }
}

fn print_output<T: Serialize>(format: OutputFormat, value: &T, summary: String) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{summary}"),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(value)
                .map_err(|e| Error::output(format!("Failed to serialize: {e}")))?;
            println!("{json}");
        }
    }
    Ok(())
}
