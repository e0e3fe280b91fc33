mod auth;
mod db;
mod models;
mod report;
mod run;
mod ui;

use anyhow::{Context, Result};

fn main() -> Result<()> {
    let db_path = get_db_path()?;
    let db = db::Database::open(&db_path)?;
    run::as_tui(&db)
}

fn get_db_path() -> Result<std::path::PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "fintui", "fintui")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.join("fintui.db"))
}
