//! Typed window properties and ordered fallback between property sources.
//!
//! Window systems expose the same information under several property names
//! (a modern one and a legacy one). Each candidate is a [`PropertySpec`], and
//! [`first_decoded`] walks a list of them in order, returning the first one
//! that decodes.

use crate::WindowId;

/// Maximum number of bytes requested for a single property.
pub const MAX_PROPERTY_BYTES: u32 = 4096;

/// The type a property must carry to be accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyType {
    /// Latin-1 text (`STRING`).
    String,
    /// UTF-8 text (`UTF8_STRING`).
    Utf8String,
    /// A list of window ids (`WINDOW`).
    Window,
    /// A list of 32-bit integers (`CARDINAL`).
    Cardinal,
}

/// A property name together with the type it is expected to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertySpec {
    pub name: &'static str,
    pub kind: PropertyType,
}

impl PropertySpec {
    pub const fn new(name: &'static str, kind: PropertyType) -> Self {
        Self { name, kind }
    }
}

/// Root-window properties listing managed clients, most preferred first.
pub const CLIENT_LIST_SOURCES: [PropertySpec; 2] = [
    PropertySpec::new("_NET_CLIENT_LIST", PropertyType::Window),
    PropertySpec::new("_WIN_CLIENT_LIST", PropertyType::Cardinal),
];

/// Per-window title properties, most preferred first.
pub const TITLE_SOURCES: [PropertySpec; 2] = [
    PropertySpec::new("WM_NAME", PropertyType::String),
    PropertySpec::new("_NET_WM_NAME", PropertyType::Utf8String),
];

/// Raw property data copied out of a window-system reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Item size in bits: 8, 16 or 32.
    pub format: u8,
    pub bytes: Vec<u8>,
}

impl Property {
    pub fn new(format: u8, bytes: Vec<u8>) -> Self {
        Self { format, bytes }
    }

    /// Interprets the data as text, stopping at the first NUL byte.
    pub fn as_text(&self) -> String {
        let end = self
            .bytes
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(self.bytes.len());
        String::from_utf8_lossy(&self.bytes[..end]).into_owned()
    }

    /// Interprets the data as a list of 32-bit window ids.
    ///
    /// Returns an empty list if the property is not 32-bit formatted.
    /// Trailing bytes that do not form a whole item are ignored.
    pub fn as_window_ids(&self) -> Vec<WindowId> {
        if self.format != 32 {
            return Vec::new();
        }
        self.bytes
            .chunks_exact(4)
            .map(|c| u32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
            .collect()
    }
}

/// Anything that can fetch typed window properties.
///
/// Implementations return `None` when the property is missing, when the
/// query fails, or when the property's type is not `kind`.
pub trait PropertySource {
    /// The root window, which carries desktop-wide properties.
    fn root(&self) -> WindowId;

    /// Fetches `name` from `window`, requiring type `kind`.
    fn property(&self, window: WindowId, name: &str, kind: PropertyType) -> Option<Property>;
}

/// Tries each spec in order and returns the first property that decodes.
pub fn first_decoded<S: PropertySource + ?Sized>(
    source: &S,
    window: WindowId,
    specs: &[PropertySpec],
) -> Option<(PropertySpec, Property)> {
    specs.iter().find_map(|spec| {
        source
            .property(window, spec.name, spec.kind)
            .map(|prop| (*spec, prop))
    })
}
