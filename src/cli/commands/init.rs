use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - an empty events file, the uploads and output folders
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing locandine…");

    let cfg = Config::init_all(cli.data.clone(), cli.test)?;

    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗂️  Events     : {}", cfg.data_path().display());
    println!("🖼️  Uploads    : {}", cfg.uploads_path().display());

    println!("🎉 locandine initialization completed!");
    Ok(())
}
