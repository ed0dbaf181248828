mod cmd;
pub mod conf;
pub mod pkg;
mod prelude;

use crate::{conf::settings, prelude::Result};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    tracing::info!("starting {}", &settings.service_name);

    cmd::run().await?;
    Ok(())
}
