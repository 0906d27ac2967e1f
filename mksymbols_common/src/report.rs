use std::fmt::{Display, Formatter};
use tracing::info;

/// The kind of event being reported to the operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Label {
    Ensure,
    Create,
    Missing,
    Write,
}
impl Display for Label {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Label::Ensure => "ENSURE",
            Label::Create => "CREATE",
            Label::Missing => "MISSING",
            Label::Write => "WRITE",
        })
    }
}

/// Receives status messages about artifacts the tool creates or expects.
pub trait Reporter {
    fn report(&self, label: Label, message: &str);
}
impl<T: Reporter + ?Sized> Reporter for &T {
    fn report(&self, label: Label, message: &str) {
        (**self).report(label, message)
    }
}

/// Reports through the `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;
impl Reporter for TracingReporter {
    fn report(&self, label: Label, message: &str) {
        info!("{label:>7} {message}");
    }
}

/// Formats a byte count as kilobytes with two decimal places.
pub fn format_size(bytes: u64) -> String {
    format!("{:.2}KB", bytes as f64 / 1024.0)
}
