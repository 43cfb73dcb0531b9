//! Per-request facts consumed during asset resolution.
//!
//! The resolver never reads ambient state. Everything it needs from the
//! surrounding request — protocol, host, client capabilities, debug level —
//! is captured once in a [`RequestContext`] value, so every resolution is a
//! pure function of (configuration, context, input).

/// Policy controlling when the cache-busting timestamp suffix is appended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimestampPolicy {
    /// Never append a suffix.
    #[default]
    Off,
    /// Append a suffix outside local-debug mode.
    Enabled,
    /// Always append a suffix, debug mode included.
    Force,
}

/// Snapshot of the ambient request facts taken at the start of a render.
///
/// Construct one per request; the resolver treats it as read-only, so a
/// multi-threaded host can hand each request its own snapshot without any
/// shared state.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Whether the current request is served over TLS.
    pub tls: bool,
    /// Host name the current request was addressed to.
    pub host: String,
    /// Whether the client's `Accept-Encoding` advertises gzip support.
    pub accepts_gzip: bool,
    /// Whether the host application runs in local-debug mode.
    pub debug: bool,
    /// Timestamp policy configured by the host application.
    pub timestamp_policy: TimestampPolicy,
}

impl RequestContext {
    /// Context for a plain HTTP request against the given host, with every
    /// optional capability turned off.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            tls: false,
            host: host.into(),
            accepts_gzip: false,
            debug: false,
            timestamp_policy: TimestampPolicy::Off,
        }
    }
}

/// Whether an `Accept-Encoding` header value advertises gzip support.
pub fn header_accepts_gzip(value: &str) -> bool {
    value.to_ascii_lowercase().contains("gzip")
}
