use crate::domain::{MealPlanError, Notifier};
use std::io::{self, Stdout, Write};
use std::sync::Mutex;

// Console stand-in for a modal alert: one line per message, flushed before returning.
// Failures go to the diagnostic channel through tracing.
pub struct ConsoleNotifier<W = Stdout> {
    out: Mutex<W>,
}

impl ConsoleNotifier<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleNotifier<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> Notifier for ConsoleNotifier<W> {
    fn alert(&self, message: &str) {
        let mut out = match self.out.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = writeln!(out, "{message}").and_then(|()| out.flush()) {
            tracing::warn!(error = %e, "failed to write alert.");
        }
    }

    fn report_failure(&self, err: &MealPlanError) {
        tracing::error!("{}", err.log_line());
    }
}
