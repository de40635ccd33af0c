use std::process::ExitCode;

use tracing_subscriber::{prelude::*, EnvFilter, Layer};

fn main() -> ExitCode {
    // Logs go to stderr so stdout only carries results
    let fmt_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "practice_lib=info,email_normalizer=info,warn".into());

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(fmt_filter),
        )
        .init();

    practice_lib::run()
}
