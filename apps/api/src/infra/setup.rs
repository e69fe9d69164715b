use crate::{
    adapters::{http::app_state::AppState, persistence::MemoryPersistence},
    infra::config::AppConfig,
    use_cases::waitlist::{WaitlistRepo, WaitlistUseCases},
};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Wires storage and use cases. Storage lives as long as the returned state.
pub fn init_app_state(config: AppConfig) -> AppState {
    let storage_arc = Arc::new(MemoryPersistence::new());

    let waitlist_use_cases = WaitlistUseCases::new(storage_arc as Arc<dyn WaitlistRepo>);

    AppState {
        config: Arc::new(config),
        waitlist_use_cases: Arc::new(waitlist_use_cases),
    }
}

pub fn init_tracing(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_filter.as_str().into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don't show target (module path)
        .with_level(true) // show log level
        .pretty(); // human-friendly, with colors

    // File (structured JSON logs)
    let mut file_error = None;
    let json_layer = config.log_file.as_ref().and_then(|path| match File::create(path) {
        Ok(file) => Some(
            fmt::layer()
                .json()
                .with_writer(file)
                .with_current_span(true)
                .with_span_list(true),
        ),
        Err(err) => {
            file_error = Some((path.display().to_string(), err));
            None
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();

    if let Some((path, err)) = file_error {
        tracing::warn!(path = %path, error = %err, "Cannot create log file, logging to console only");
    }
}
