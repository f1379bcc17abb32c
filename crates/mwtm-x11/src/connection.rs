use std::cell::RefCell;
use std::collections::HashMap;

use mwtm_core::{Error, Result};
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{Atom, ConnectionExt as _, Window};
use x11rb::rust_connection::RustConnection;

/// An open connection to an X server, bound to one screen's root window.
///
/// Dropping the value flushes outstanding requests and closes the
/// connection, so every exit path releases it exactly once.
pub struct X11Desktop {
    pub(crate) conn: RustConnection,
    pub(crate) root: Window,
    atoms: RefCell<HashMap<String, Atom>>,
}

impl X11Desktop {
    /// Connects to `display`, or to `$DISPLAY` when `None`.
    pub fn connect(display: Option<&str>) -> Result<Self> {
        let (conn, screen) = RustConnection::connect(display).map_err(|e| Error::Connection {
            display: display_name(display),
            reason: e.to_string(),
        })?;

        let root = conn
            .setup()
            .roots
            .get(screen)
            .map(|s| s.root)
            .ok_or_else(|| Error::Connection {
                display: display_name(display),
                reason: format!("screen {screen} does not exist"),
            })?;

        let name = display_name(display);
        tracing::debug!(display = %name, screen, root, "connected");

        Ok(Self {
            conn,
            root,
            atoms: RefCell::new(HashMap::new()),
        })
    }

    /// Returns the atom for `name`, interning it on first use.
    ///
    /// Returns `None` if the server did not answer.
    pub(crate) fn atom(&self, name: &str) -> Option<Atom> {
        if let Some(&atom) = self.atoms.borrow().get(name) {
            return Some(atom);
        }

        let atom = self
            .conn
            .intern_atom(false, name.as_bytes())
            .ok()?
            .reply()
            .ok()?
            .atom;
        self.atoms.borrow_mut().insert(name.to_owned(), atom);
        Some(atom)
    }

    /// Returns the name of `atom`, decoded lossily.
    pub(crate) fn atom_name(&self, atom: Atom) -> Option<String> {
        let reply = self.conn.get_atom_name(atom).ok()?.reply().ok()?;
        Some(String::from_utf8_lossy(&reply.name).into_owned())
    }
}

impl Drop for X11Desktop {
    fn drop(&mut self) {
        if let Err(e) = self.conn.flush() {
            tracing::debug!("flush on close failed: {e}");
        }
        tracing::debug!("closing display");
    }
}

/// The display name used in diagnostics.
fn display_name(display: Option<&str>) -> String {
    display
        .map(str::to_owned)
        .or_else(|| std::env::var("DISPLAY").ok())
        .unwrap_or_else(|| "(unset)".into())
}
