use crate::{Rect, normalize};

/// A named monitor and its geometry at the time it was queried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorRecord {
    pub name: String,
    pub geometry: Rect,
    pub primary: bool,
}

impl MonitorRecord {
    /// Creates a record, normalizing `name` for case-insensitive lookup.
    pub fn new(name: &str, geometry: Rect, primary: bool) -> Self {
        Self {
            name: normalize(name),
            geometry,
            primary,
        }
    }
}

/// Finds the first monitor whose name equals `name` exactly.
///
/// `name` must already be normalized. Substrings never match, so `"hdmi"`
/// does not resolve to `"hdmi-1"`.
pub fn find_by_name<'a>(monitors: &'a [MonitorRecord], name: &str) -> Option<&'a MonitorRecord> {
    monitors.iter().find(|m| m.name == name)
}
