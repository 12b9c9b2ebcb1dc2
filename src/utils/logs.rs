use tracing_subscriber::EnvFilter;

// json output for the http service, compact lines for the interactive console.
// RUST_LOG overrides the default info level.
pub fn setup_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        .without_time()
        // keep logs off stdout so they never interleave with console output
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.compact().init();
    }
}
