//! Built-in [`Connection`](super::Connection) implementations for common
//! transport types.

#[cfg(feature = "alloc")]
mod boxed;

#[cfg(feature = "std")]
mod tcpstream;

#[cfg(all(feature = "std", unix))]
mod unixstream;
