use std::sync::Arc;

use sqlx::{PgPool, Pool, Postgres, Transaction, postgres::PgPoolOptions};
use standard_error::{Interpolate, StandardError};

use crate::{conf::settings, pkg::internal::email::Mailer, prelude::Result};

pub fn db_pool() -> Result<Pool<Postgres>> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.database_pool_max_connections)
        .connect_lazy(&settings.database_url)?;
    Ok(pool)
}

pub trait GetTxn {
    async fn begin_txn(&self) -> Result<Transaction<'static, Postgres>>;
}

impl GetTxn for PgPool {
    async fn begin_txn(&self) -> Result<Transaction<'static, Postgres>> {
        let tx = self
            .begin()
            .await
            .map_err(|e| StandardError::new("ERR-DB-000").interpolate_err(e.to_string()))?;
        Ok(tx)
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub db_pool: Arc<PgPool>,
    pub mailer: Mailer,
}

impl AppState {
    pub async fn new() -> Result<AppState> {
        Ok(AppState {
            db_pool: Arc::new(db_pool()?),
            mailer: Mailer::start(),
        })
    }
}
