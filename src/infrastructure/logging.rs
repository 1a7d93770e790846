use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset, empty or unparsable.
pub const DEFAULT_LOG_DIRECTIVE: &str = "unit_converter=warn";

/// Builds the log filter from `RUST_LOG`.
pub fn env_filter() -> EnvFilter {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_from_directives(directives.as_deref())
}

/// Builds the log filter from explicit directives. The default directive
/// only applies when none are given.
pub fn filter_from_directives(directives: Option<&str>) -> EnvFilter {
    directives
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_DIRECTIVE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ConverterState;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn captured_log(directives: Option<&str>) -> String {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter_from_directives(directives))
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut state = ConverterState::default();
            state.set_input_text("1");
            let _ = state.set_output_unit("Furlongs");
        });

        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_crate_debug_directive_enables_recompute_events() {
        let out = captured_log(Some("unit_converter=debug"));
        assert!(out.contains("recomputed conversion"), "log was: {out}");
    }

    #[test]
    fn test_global_debug_directive_enables_recompute_events() {
        let out = captured_log(Some("debug"));
        assert!(out.contains("recomputed conversion"), "log was: {out}");
    }

    #[test]
    fn test_default_directive_keeps_warnings_only() {
        for directives in [None, Some(""), Some("  ")] {
            let out = captured_log(directives);
            assert!(!out.contains("recomputed conversion"), "log was: {out}");
            assert!(out.contains("rejected unit selection"), "log was: {out}");
        }
    }

    #[test]
    fn test_filter_shows_requested_directive() {
        assert_eq!(
            filter_from_directives(Some("unit_converter=debug")).to_string(),
            "unit_converter=debug"
        );
        assert_eq!(filter_from_directives(None).to_string(), DEFAULT_LOG_DIRECTIVE);
    }
}
