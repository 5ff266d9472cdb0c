use std::sync::Arc;

use fab_core::config::Config;

#[tokio::main]
async fn main() -> Result<(), fab_core::Error> {
    fab_core::logging::init("fab")?;

    // Missing token is the one fatal startup condition; refuse to serve.
    let cfg = Arc::new(Config::load()?);

    fab_telegram::router::run_polling(cfg)
        .await
        .map_err(|e| fab_core::Error::External(format!("telegram bot failed: {e}")))?;

    Ok(())
}
