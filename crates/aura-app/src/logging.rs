//! Tracing subscriber setup.

use std::io;

use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_DIRECTIVE: &str = "aura=info";

/// Layer a comma-separated directive list on top of `base`.
///
/// Each part is parsed on its own so one bad entry does not drop the rest.
/// Returns the unparseable parts. When none parse, `aura=info` is applied.
pub fn build_filter(base: EnvFilter, directives: &str) -> (EnvFilter, Vec<String>) {
    let mut filter = base;
    let mut applied = 0;
    let mut rejected = Vec::new();

    for part in directives.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        match part.parse::<Directive>() {
            Ok(directive) => {
                filter = filter.add_directive(directive);
                applied += 1;
            }
            Err(_) => rejected.push(part.to_string()),
        }
    }

    if applied == 0 {
        if let Ok(directive) = DEFAULT_LOG_DIRECTIVE.parse::<Directive>() {
            filter = filter.add_directive(directive);
        }
    }
    (filter, rejected)
}

/// Install the stderr fmt subscriber. `RUST_LOG` is honored, with
/// `directives` layered on top.
pub fn init(directives: &str) {
    let (filter, rejected) = build_filter(EnvFilter::from_default_env(), directives);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    for part in rejected {
        tracing::warn!(directive = %part, "ignoring invalid log directive");
    }
}
