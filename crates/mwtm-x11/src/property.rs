use mwtm_core::property::MAX_PROPERTY_BYTES;
use mwtm_core::{Property, PropertySource, PropertyType, WindowId};
use x11rb::protocol::xproto::{Atom, AtomEnum, ConnectionExt as _};

use crate::X11Desktop;

impl X11Desktop {
    /// Resolves the atom a property of `kind` must carry.
    fn type_atom(&self, kind: PropertyType) -> Option<Atom> {
        match kind {
            PropertyType::String => Some(AtomEnum::STRING.into()),
            PropertyType::Window => Some(AtomEnum::WINDOW.into()),
            PropertyType::Cardinal => Some(AtomEnum::CARDINAL.into()),
            PropertyType::Utf8String => self.atom("UTF8_STRING"),
        }
    }
}

impl PropertySource for X11Desktop {
    fn root(&self) -> WindowId {
        self.root
    }

    fn property(&self, window: WindowId, name: &str, kind: PropertyType) -> Option<Property> {
        let name_atom = self.atom(name)?;
        let type_atom = self.type_atom(kind)?;

        // long_length counts 32-bit units.
        let reply = match self
            .conn
            .get_property(false, window, name_atom, type_atom, 0, MAX_PROPERTY_BYTES / 4)
        {
            Ok(cookie) => cookie.reply(),
            Err(e) => {
                tracing::debug!("cannot request {name} on 0x{window:x}: {e}");
                return None;
            }
        };

        let reply = match reply {
            Ok(reply) => reply,
            Err(e) => {
                tracing::debug!("cannot get {name} on 0x{window:x}: {e}");
                return None;
            }
        };

        accept(type_atom, reply.type_, reply.format, reply.value_len, reply.value)
    }
}

/// Accepts a property reply only if its type is `expected`.
///
/// A missing property comes back with type `NONE`, so it is rejected here
/// too. The data is trimmed to `value_len` items of `format` bits.
fn accept(
    expected: Atom,
    actual: Atom,
    format: u8,
    value_len: u32,
    mut value: Vec<u8>,
) -> Option<Property> {
    if actual != expected {
        return None;
    }
    let len = (value_len as usize).saturating_mul(usize::from(format / 8));
    value.truncate(len);
    Some(Property::new(format, value))
}
