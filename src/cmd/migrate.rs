use crate::{conf::settings, pkg::server::state::GetTxn, prelude::Result};
use sqlx::{migrate::Migrator, postgres::PgPoolOptions};
use standard_error::{Interpolate, StandardError};

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

fn db_err(e: impl ToString) -> StandardError {
    StandardError::new("ERR-DB-000").interpolate_err(e.to_string())
}

pub async fn apply() -> Result<()> {
    let pool = PgPoolOptions::new()
        .connect(&settings.database_url)
        .await
        .map_err(db_err)?;

    tracing::debug!("connected to db");
    let mut tx = pool.begin_txn().await?;
    MIGRATOR.run(&mut *tx).await.map_err(db_err)?;
    tx.commit().await.map_err(db_err)?;

    println!("Migrations applied successfully");
    Ok(())
}
