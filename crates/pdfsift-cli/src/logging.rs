use tracing_subscriber::EnvFilter;

/// Default filter for a `-v` count, used when `RUST_LOG` is unset.
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "pdfsift=warn",
        1 => "pdfsift=info",
        _ => "pdfsift=debug",
    }
}

/// Install the stderr log subscriber. Stdout is reserved for extraction output.
pub fn init(verbose: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(default_directive(0), "pdfsift=warn");
        assert_eq!(default_directive(1), "pdfsift=info");
        assert_eq!(default_directive(2), "pdfsift=debug");
        assert_eq!(default_directive(9), "pdfsift=debug");
    }
}
