use std::process::ExitCode;

use tracing::{error, info};

fn init_logging() {
    // .env first so RUST_LOG reaches the subscriber.
    dotenvy::dotenv().ok();
    common::utils::logging::init_logging_default();
}

fn main() -> ExitCode {
    init_logging();

    std::panic::set_hook(Box::new(|info| {
        error!(message = %info, "unhandled panic");
    }));

    // Worker-thread count comes from config.toml when present; the runtime
    // default applies otherwise. Full validation happens inside server::run.
    let worker_threads = configs::AppConfig::load_and_validate()
        .ok()
        .and_then(|cfg| cfg.server.worker_threads);

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(threads) = worker_threads {
        builder.worker_threads(threads);
    }
    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        version = env!("CARGO_PKG_VERSION"),
        pid = std::process::id(),
        "carryou backend starting"
    );

    match rt.block_on(server::run()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %format!("{e:#}"), "server exited with error");
            ExitCode::FAILURE
        }
    }
}
