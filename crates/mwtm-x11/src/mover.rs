use mwtm_core::{WindowId, WindowMover};
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{ConfigureWindowAux, ConnectionExt as _};

use crate::X11Desktop;

impl WindowMover for X11Desktop {
    /// Sends a `ConfigureWindow` request setting only x and y.
    ///
    /// The cookie is dropped, so any error the server reports is discarded.
    fn move_window(&self, window: WindowId, x: i32, y: i32) {
        let aux = ConfigureWindowAux::new().x(x).y(y);
        if let Err(e) = self.conn.configure_window(window, &aux) {
            tracing::warn!("cannot send move for 0x{window:x}: {e}");
        }
    }

    fn flush(&self) {
        if let Err(e) = self.conn.flush() {
            tracing::warn!("cannot flush move requests: {e}");
        }
    }
}
