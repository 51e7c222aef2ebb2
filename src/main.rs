// cursorrules - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading and logging initialisation
// 3. Running the install and reporting the result
// 4. Process exit status (0 on success, 1 on any failure)

use clap::Parser;
use cursorrules::app::install::{install, InstallTarget};
use cursorrules::platform;
use cursorrules::util;

/// cursorrules - install a global commit-message convention for Cursor.
///
/// Writes `.cursorrules` into Cursor's per-user configuration directory so
/// every project picks up the same commit rules. Takes no arguments.
#[derive(Parser, Debug)]
#[command(name = "cursorrules", version, about)]
struct Cli {
    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,

    /// Print the target path without creating or writing anything.
    #[arg(short = 'n', long = "dry-run")]
    dry_run: bool,
}

fn main() {
    let cli = Cli::parse();

    let (config, config_warnings) = platform::config::load_config(&platform::config::config_dir());
    util::logging::init(cli.debug, config.log_level.as_deref());

    for warning in &config_warnings {
        tracing::warn!("{}", warning);
    }

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        dry_run = cli.dry_run,
        "cursorrules starting"
    );

    if let Err(e) = run(&cli) {
        tracing::error!(error = %e, "Failed to install commit rules");
        eprintln!("Error: failed to set up global commit rules: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> util::error::Result<()> {
    let target = InstallTarget::resolve()?;

    if cli.dry_run {
        println!("Would write commit rules to: {}", target.rules_path.display());
        return Ok(());
    }

    let outcome = install(&target)?;

    if outcome.created_dir {
        println!("Created Cursor config directory: {}", target.cursor_dir.display());
    }
    if outcome.unchanged {
        println!(
            "Global Cursor commit rules already up to date: {}",
            outcome.rules_path.display()
        );
    } else {
        println!(
            "Wrote commit rules to global Cursor config: {}",
            outcome.rules_path.display()
        );
    }
    println!("All projects will now use these global commit rules.");
    Ok(())
}
