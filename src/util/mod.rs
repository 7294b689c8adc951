use std::sync::Once;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[inline]
pub fn is_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

#[inline]
pub fn is_numeric(c: char) -> bool {
    c.is_ascii_digit()
}

#[inline]
pub fn is_alphanumeric(c: char) -> bool {
    is_alphabetic(c) || is_numeric(c)
}

static TRACING_INIT: Once = Once::new();

/// Installs the tracing subscriber used for internal debug output.
///
/// `RUST_LOG` takes precedence; otherwise `verbose` selects `debug`, and
/// without either nothing is installed. Safe to call more than once.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) if verbose => EnvFilter::new("sexpr_lang=debug"),
            Err(_) => return,
        };

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    });
}
