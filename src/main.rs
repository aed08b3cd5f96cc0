use locshare::config::Config;
use locshare::services::demo;
use log::{error, info};

fn run() -> Result<(), String> {
    // 1) Load config
    let cfg = Config::from_env()?;
    info!("Config loaded (seed_demo={})", cfg.seed_demo);

    // 2) Connect DB
    let mut conn = locshare::establish_connection(&cfg.database_url)?;
    info!("Connected to database");

    // 3) Apply pending database migrations
    locshare::apply_database_migrations(&mut conn)?;

    // 4) Optional demo seed
    if cfg.seed_demo {
        demo::run(&mut conn)?;
    } else {
        info!("Demo seeding disabled; set LOCSHARE_SEED_DEMO=1 to enable");
    }

    Ok(())
}

fn main() {
    let default_filter = env_logger::Env::default().default_filter_or("info");
    env_logger::Builder::from_env(default_filter)
        .format_timestamp_secs()
        .init();

    info!(
        "locshare {} (git {}) starting",
        env!("CARGO_PKG_VERSION"),
        env!("BUILD_TIME_GIT_HASH")
    );
    if let Err(e) = run() {
        error!("fatal: {}", e);
        std::process::exit(1);
    }
}
