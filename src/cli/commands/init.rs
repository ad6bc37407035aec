use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::{AuditOp, ttlog_quiet};
use crate::db::pool::DbPool;
use crate::db::sheet::{CARE_SHEET, MEDICAL_SHEET};
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite store with both sheets
///  - all pending DB migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing catlog…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &db_path);

    let pool = DbPool::new(&db_path)?;
    let status = init_db(&pool.conn)?;

    success(format!(
        "Sheets '{}' ({} rows) and '{}' ({} rows) ready in {}",
        CARE_SHEET, status.care_rows, MEDICAL_SHEET, status.medical_rows, &db_path
    ));

    ttlog_quiet(
        &pool.conn,
        AuditOp::Init,
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    );

    Ok(())
}
