use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::db::repository::SqliteRepository;
use crate::db::seed::seed_initial_entries;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and all pending migrations
///  - optionally the initial calendar (`--seed`)
pub fn handle(cli: &Cli) -> AppResult<()> {
    let seed = matches!(cli.command, Commands::Init { seed: true });

    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing cronograma…");
    println!("🗄️  Database   : {}", &db_path);

    let repo = SqliteRepository::open(&db_path)?;

    ttlog_quiet(
        repo.conn(),
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    );

    if seed {
        let inserted = seed_initial_entries(repo.conn())?;
        if inserted > 0 {
            ttlog_quiet(repo.conn(), "seed", "cronograma", &format!("{inserted} entries"));
            success(format!("Inserted {inserted} initial entries."));
        } else {
            info("Schedule already has entries; seeding skipped.");
        }
    }

    println!("🎉 cronograma initialization completed!");
    Ok(())
}
