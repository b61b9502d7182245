//! Tracing subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

/// Secondary filter variable consulted when `RUST_LOG` is unset.
pub(crate) const LOG_ENV: &str = "FOLIO_LOG";

const DEFAULT_DIRECTIVES: &str = "folio=warn";

/// Install a stderr `fmt` subscriber. Safe to call once per process.
pub(crate) fn initialize_logging() {
    let directives = filter_directives(|name| std::env::var(name).ok());
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|err| {
        eprintln!("warning: ignoring invalid log filter `{directives}`: {err}");
        EnvFilter::new(DEFAULT_DIRECTIVES)
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// `RUST_LOG`, then `FOLIO_LOG`, then the built-in default.
fn filter_directives<FEnv>(env_lookup: FEnv) -> String
where
    FEnv: Fn(&str) -> Option<String>,
{
    ["RUST_LOG", LOG_ENV]
        .into_iter()
        .filter_map(|name| env_lookup(name))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_DIRECTIVES.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_log_wins_over_folio_log() {
        let env = |name: &str| match name {
            "RUST_LOG" => Some("folio=debug".to_string()),
            LOG_ENV => Some("folio=trace".to_string()),
            _ => None,
        };
        assert_eq!(filter_directives(env), "folio=debug");
    }

    #[test]
    fn folio_log_used_when_rust_log_blank() {
        let env = |name: &str| match name {
            "RUST_LOG" => Some("  ".to_string()),
            LOG_ENV => Some("folio=info".to_string()),
            _ => None,
        };
        assert_eq!(filter_directives(env), "folio=info");
    }

    #[test]
    fn defaults_to_warn() {
        assert_eq!(filter_directives(|_: &str| None), DEFAULT_DIRECTIVES);
    }
}
