use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::kv::KvStore;
use crate::ui::messages::success;

/// Create the configuration file and the store.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;

    // Opening the store creates the kv table on first use
    let db_str = db_path.to_string_lossy().to_string();
    KvStore::open(&db_str)?;

    if !cli.test {
        success(format!("Config file: {:?}", Config::config_file()));
    }
    success(format!("Store:       {db_path:?}"));

    Ok(())
}
