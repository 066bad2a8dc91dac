//! Opt-in tracing output for the `lox` binary.
//!
//! Library crates only emit events; this installs the subscriber. Nothing
//! is installed unless `LOX_LOG` (or, failing that, `RUST_LOG`) is set,
//! e.g. `LOX_LOG=lox_eval=trace lox prog.lox`.

use std::sync::Once;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: Once = Once::new();

/// Install a hierarchical stderr subscriber filtered by `LOX_LOG`/`RUST_LOG`.
/// Later calls do nothing.
pub fn init() {
    TRACING_INIT.call_once(|| {
        let directives = std::env::var("LOX_LOG").or_else(|_| std::env::var("RUST_LOG"));
        let Ok(directives) = directives else {
            return;
        };

        let layer = tracing_tree::HierarchicalLayer::new(2)
            .with_targets(true)
            .with_indent_lines(true);
        // Fails only if another subscriber is already set.
        let _ = tracing_subscriber::registry()
            .with(EnvFilter::new(directives))
            .with(layer)
            .try_init();
    });
}
