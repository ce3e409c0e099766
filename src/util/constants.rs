// logtab - util/constants.rs
//
// Single source of truth for all named constants and defaults.
// Nothing here is configurable at runtime.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name (also the binary name shown in usage text).
pub const APP_NAME: &str = "logtab";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Usage line printed to stdout when the argument count is wrong.
pub const USAGE: &str = "Usage: logtab <log_file_path>";

// =============================================================================
// Output layout
// =============================================================================

/// File name of the summary, written to the current working directory.
pub const OUTPUT_FILE_NAME: &str = "summary.csv";

/// Header of the first column, holding the one-based instance number.
pub const INSTANCE_COLUMN: &str = "Instance";

/// Cell value used when an instance has no result for a variant.
pub const MISSING_VALUE: &str = "N/A";

/// Algorithm variants in output column order.
///
/// Column order is fixed: it does not depend on which variants appear in the
/// log or in which order. Aliases outside this list are never rendered.
pub const VARIANT_ORDER: [&str; 5] = [
    "PADRAO",
    "PADRAO_POP",
    "PADRAO_MUT",
    "PADRAO_EVOL1",
    "PADRAO_EVOL2",
];

// =============================================================================
// Instance numbering
// =============================================================================

/// Offset added to the number parsed from an instance file name.
/// Instance files are numbered from zero; the summary numbers from one.
pub const INSTANCE_INDEX_OFFSET: i64 = 1;

// =============================================================================
// Logging
// =============================================================================

/// Default tracing filter when `RUST_LOG` is unset. Kept at `warn` so a
/// normal run is silent apart from genuine problems.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// =============================================================================
// Exit codes
// =============================================================================

/// Exit status for a wrong number of command-line arguments.
pub const EXIT_USAGE: i32 = 1;

/// Exit status for any failure after the arguments were accepted.
pub const EXIT_FAILURE: i32 = 2;
