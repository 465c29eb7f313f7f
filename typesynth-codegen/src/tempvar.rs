//! Unique temporary variable names for generated code.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Mints `tmp1`, `tmp2`, ... so that independently generated fragments never declare the
/// same temporary twice.
///
/// Callers own their counter and pass it to whatever generates code. [`TempCounter::global`]
/// is available for code that has to share a single sequence across the whole process.
#[derive(Debug, Default)]
pub struct TempCounter {
    count: AtomicUsize,
}

impl TempCounter {
    /// Creates a counter starting at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            count: AtomicUsize::new(0),
        }
    }

    /// Returns the process-wide counter.
    #[must_use]
    pub fn global() -> &'static TempCounter {
        static GLOBAL: TempCounter = TempCounter::new();
        &GLOBAL
    }

    /// Returns a new unique variable name.
    pub fn tempvar(&self) -> String {
        let n = self.count.fetch_add(1, Ordering::Relaxed) + 1;
        format!("tmp{n}")
    }

    /// Returns the number of names minted so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }
}
