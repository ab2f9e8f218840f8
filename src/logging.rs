use tracing_subscriber::EnvFilter;

/// Initialize tracing for a host binary and bridge `log` into `tracing`.
///
/// The widget itself only emits `log` records (drag start/end at debug
/// level); hosts that already run their own subscriber can skip this
/// entirely. With `enable_debug` the filter is forced to `debug`,
/// otherwise `RSLIDER_LOG` then `RUST_LOG` are consulted, defaulting to
/// `warn`. Safe to call more than once.
pub fn init_tracing(enable_debug: bool) {
    let _ = tracing_log::LogTracer::init();

    let env_filter = if enable_debug {
        EnvFilter::new("debug")
    } else {
        std::env::var("RSLIDER_LOG")
            .ok()
            .map(EnvFilter::new)
            .or_else(|| EnvFilter::try_from_default_env().ok())
            .unwrap_or_else(|| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init()
        .ok();
}
