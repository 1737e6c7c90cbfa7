use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

/// Installs the global console logger. The returned guard must stay alive
/// until shutdown or buffered lines are dropped.
pub fn init_default_logger() -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());

    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(writer)
        .init();

    guard
}
