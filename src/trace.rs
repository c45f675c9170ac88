//! Matcher instrumentation behind the `tracing` feature.
//!
//! Both macros take a literal name followed by `key = value` fields. Without
//! the feature the field values are still evaluated and then dropped.

/// Opens an info-level span named after the matching call.
#[cfg(feature = "tracing")]
macro_rules! trace_span {
    ($name:literal, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::info_span!($name, $($key = $value),+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_span {
    ($name:literal, $($key:ident = $value:expr),+ $(,)?) => {{
        let _ = ($($value,)+);
        $crate::trace::NoopSpan
    }};
}

/// Records the outcome of a matching call as an info-level event.
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($name:literal, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::info!($($key = $value),+, $name)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($name:literal, $($key:ident = $value:expr),+ $(,)?) => {
        let _ = ($($value,)+);
    };
}

pub(crate) use trace_event;
pub(crate) use trace_span;

/// Span guard returned when tracing is compiled out.
#[cfg(not(feature = "tracing"))]
pub(crate) struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    #[inline]
    pub(crate) fn entered(self) -> Self {
        self
    }
}
