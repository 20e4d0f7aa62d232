//! Feature-gated tracing hooks for corpus scans.
//!
//! With the `tracing` feature the scan reports through the `tracing` crate:
//! one span per scan, `DEBUG` events per scored candidate and `INFO` events
//! for new leaders and the final result. Without the feature the macros
//! expand to no-ops.

/// Opens an info-level span named `$name` with optional fields.
#[cfg(feature = "tracing")]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        tracing::span!(tracing::Level::INFO, $name $(, $($field)*)?)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        $crate::trace::DisabledSpan
    };
}

/// Emits an event at `tracing::Level::$level` with key/value fields.
///
/// Without the feature the field values are still evaluated once, then dropped.
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($level:ident, $name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::event!(name: $name, tracing::Level::$level, $($key = $value),+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($level:ident, $name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        let _ = ($($value,)+);
    };
}

pub(crate) use trace_event;
pub(crate) use trace_span;

/// Span guard returned by `trace_span!` when tracing is compiled out.
#[cfg(not(feature = "tracing"))]
#[derive(Debug)]
pub struct DisabledSpan;

#[cfg(not(feature = "tracing"))]
impl DisabledSpan {
    #[inline]
    pub fn entered(self) -> Self {
        self
    }
}
