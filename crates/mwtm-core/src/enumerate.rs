//! Snapshots of the desktop: managed windows and active monitors.

use crate::error::EnumerationError;
use crate::property::{CLIENT_LIST_SOURCES, PropertySource, TITLE_SOURCES, first_decoded};
use crate::{MonitorRecord, Rect, WindowId, WindowRecord};

/// A monitor as reported by the window system, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMonitor {
    pub name: String,
    pub geometry: Rect,
    pub primary: bool,
}

/// Anything that can report the active monitors.
pub trait MonitorSource {
    /// Returns every active monitor, or an error if the query failed.
    fn monitors(&self) -> Result<Vec<RawMonitor>, EnumerationError>;
}

/// Lists managed top-level windows in client-list order.
///
/// Fails only if no client list property can be decoded. Windows without a
/// title get an empty one.
pub fn list_windows<S: PropertySource + ?Sized>(
    source: &S,
) -> Result<Vec<WindowRecord>, EnumerationError> {
    let (spec, list) = first_decoded(source, source.root(), &CLIENT_LIST_SOURCES)
        .ok_or(EnumerationError::ClientList)?;

    let handles = list.as_window_ids();
    tracing::debug!(source = spec.name, count = handles.len(), "client list decoded");

    Ok(handles
        .into_iter()
        .map(|handle| WindowRecord::new(handle, &window_title(source, handle)))
        .collect())
}

/// Returns the raw title of `window`, or an empty string if it has none.
pub fn window_title<S: PropertySource + ?Sized>(source: &S, window: WindowId) -> String {
    first_decoded(source, window, &TITLE_SOURCES)
        .map(|(_, prop)| prop.as_text())
        .unwrap_or_default()
}

/// Lists active monitors with normalized names, in the order reported.
pub fn list_monitors<S: MonitorSource + ?Sized>(
    source: &S,
) -> Result<Vec<MonitorRecord>, EnumerationError> {
    let monitors: Vec<MonitorRecord> = source
        .monitors()?
        .into_iter()
        .map(|m| MonitorRecord::new(&m.name, m.geometry, m.primary))
        .collect();

    tracing::debug!(count = monitors.len(), "monitors enumerated");
    Ok(monitors)
}
