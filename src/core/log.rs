//! Thin logging shims so call sites stay free of `cfg` noise.
//! With the `tracing` feature off they expand to nothing.

#[cfg(feature = "tracing")]
macro_rules! feed_warn {
    ($($arg:tt)*) => { ::tracing::warn!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! feed_warn {
    ($($arg:tt)*) => {{}};
}

#[cfg(feature = "tracing")]
macro_rules! feed_debug {
    ($($arg:tt)*) => { ::tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! feed_debug {
    ($($arg:tt)*) => {{}};
}

pub(crate) use feed_debug;
pub(crate) use feed_warn;
