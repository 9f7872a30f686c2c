use std::sync::Arc;

use qbot_core::{config::Config, ports::ContentSource};
use qbot_quran::QuranClient;

#[tokio::main]
async fn main() -> Result<(), qbot_core::Error> {
    qbot_core::logging::init("qbot")?;

    let cfg = Arc::new(Config::load()?);

    let content: Arc<dyn ContentSource> = Arc::new(QuranClient::new(
        cfg.api_base_url.clone(),
        cfg.request_timeout,
    ));

    qbot_telegram::router::run_polling(cfg, content)
        .await
        .map_err(|e| qbot_core::Error::External(format!("telegram bot failed: {e}")))?;

    Ok(())
}
