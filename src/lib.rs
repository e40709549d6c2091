// Drum Kit Bridge - host binding for the drum-kit engine
// Exposes transport, metronome and kit queries to a scripting host

// Module declarations
pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod facade;

// Re-exports for convenience
pub use api::*;
pub use facade::DrumKit;

use std::sync::Once;

static LOGGING: Once = Once::new();

/// Install the native log subscriber.
///
/// `log` records from the bridge are forwarded to `tracing` and written to
/// stderr (logcat on Android). Only the first call has an effect; later
/// calls, or a subscriber already installed by the host, are left alone.
pub fn init_logging(level: log::LevelFilter) {
    LOGGING.call_once(|| install_subscriber(level));
}

cfg_if::cfg_if! {
    if #[cfg(target_os = "android")] {
        fn install_subscriber(level: log::LevelFilter) {
            use tracing_subscriber::layer::SubscriberExt;
            use tracing_subscriber::util::SubscriberInitExt;

            let filter = tracing_subscriber::filter::LevelFilter::from_level(to_tracing_level(level));
            match tracing_android::layer("DrumKitBridge") {
                Ok(layer) => {
                    let _ = tracing_subscriber::registry().with(layer).with(filter).try_init();
                }
                Err(err) => eprintln!("Failed to create Android log layer: {}", err),
            }
        }
    } else {
        fn install_subscriber(level: log::LevelFilter) {
            let _ = tracing_subscriber::fmt()
                .with_max_level(to_tracing_level(level))
                .with_target(false)
                .with_writer(std::io::stderr)
                .try_init();
        }
    }
}

fn to_tracing_level(level: log::LevelFilter) -> tracing::Level {
    match level {
        log::LevelFilter::Off | log::LevelFilter::Error => tracing::Level::ERROR,
        log::LevelFilter::Warn => tracing::Level::WARN,
        log::LevelFilter::Info => tracing::Level::INFO,
        log::LevelFilter::Debug => tracing::Level::DEBUG,
        log::LevelFilter::Trace => tracing::Level::TRACE,
    }
}
