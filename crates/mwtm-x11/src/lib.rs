/// Display connection and atom cache.
pub mod connection;

/// RandR monitor enumeration.
pub mod monitor;

/// Move requests.
pub mod mover;

/// Typed window property decoding.
pub mod property;

pub use connection::X11Desktop;
