//! Output mode and terminal capability probing.

use once_cell::sync::Lazy;
use std::sync::Mutex;

/// Controls whether styling is emitted.
///
/// `Auto` asks the capability probe on every styling call, so redirecting
/// output mid-run (or swapping the probe in tests) takes effect
/// immediately; the answer is never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Style only when the probe reports a capable terminal.
    #[default]
    Auto,
    /// Always emit escape sequences.
    Term,
    /// Never emit escape sequences.
    Text,
}

impl OutputMode {
    pub(crate) fn should_use_color(self) -> bool {
        match self {
            OutputMode::Auto => probe_supports_color(),
            OutputMode::Term => true,
            OutputMode::Text => false,
        }
    }
}

type SupportProbe = fn() -> bool;

static SUPPORT_PROBE: Lazy<Mutex<SupportProbe>> = Lazy::new(|| Mutex::new(terminal_probe));

/// Overrides the probe consulted by [`OutputMode::Auto`].
///
/// Useful for tests or for embedders that already know whether their
/// output stream accepts escape sequences.
pub fn set_support_probe(probe: fn() -> bool) {
    let mut guard = SUPPORT_PROBE.lock().unwrap();
    *guard = probe;
}

pub(crate) fn probe_supports_color() -> bool {
    let probe = SUPPORT_PROBE.lock().unwrap();
    (*probe)()
}

fn terminal_probe() -> bool {
    console::Term::stdout().features().colors_supported()
}
