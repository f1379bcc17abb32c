pub mod config;
pub mod dispatch;
pub mod enumerate;
pub mod error;
pub mod log;
pub mod monitor;
pub mod property;
pub mod rect;
pub mod window;

#[cfg(test)]
mod testing;

pub use dispatch::{
    DispatchReport, MatchRequest, Move, Offset, Plan, SkipReason, SkippedRequest, WindowMover,
    dispatch, parse_pairs, plan,
};
pub use enumerate::{MonitorSource, RawMonitor, list_monitors, list_windows};
pub use error::{ArgsError, EnumerationError, Error, Result};
pub use monitor::MonitorRecord;
pub use property::{Property, PropertySource, PropertySpec, PropertyType};
pub use rect::Rect;
pub use window::{WindowId, WindowRecord};

/// Lower-cases `s` so later comparisons are case-insensitive.
///
/// Applying it twice gives the same result as applying it once.
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
}
