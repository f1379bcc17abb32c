use mwtm_core::{EnumerationError, MonitorSource, RawMonitor, Rect};
use x11rb::protocol::randr::ConnectionExt as _;

use crate::X11Desktop;

impl MonitorSource for X11Desktop {
    /// Queries the active RandR monitors of the root window.
    ///
    /// The whole reply is kept until every entry has been copied out, then
    /// dropped once.
    fn monitors(&self) -> Result<Vec<RawMonitor>, EnumerationError> {
        let reply = self
            .conn
            .randr_get_monitors(self.root, true)
            .map_err(failed)?
            .reply()
            .map_err(failed)?;

        let mut monitors = Vec::with_capacity(reply.monitors.len());
        for info in &reply.monitors {
            let Some(name) = self.atom_name(info.name) else {
                tracing::warn!("cannot resolve monitor name atom {}", info.name);
                continue;
            };
            monitors.push(RawMonitor {
                name,
                geometry: geometry(info.x, info.y, info.width, info.height),
                primary: info.primary,
            });
        }
        Ok(monitors)
    }
}

fn failed(e: impl std::fmt::Display) -> EnumerationError {
    EnumerationError::Monitors {
        reason: e.to_string(),
    }
}

fn geometry(x: i16, y: i16, width: u16, height: u16) -> Rect {
    Rect::new(
        i32::from(x),
        i32::from(y),
        i32::from(width),
        i32::from(height),
    )
}
