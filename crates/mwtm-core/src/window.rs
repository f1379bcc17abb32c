use crate::normalize;

/// Opaque identifier of a top-level window, as handed out by the window system.
pub type WindowId = u32;

/// A top-level window captured during enumeration.
///
/// The window itself belongs to the window system; this only holds its id
/// and the title as it was when the snapshot was taken, lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    pub handle: WindowId,
    pub title: String,
}

impl WindowRecord {
    /// Creates a record, normalizing `title` for case-insensitive matching.
    pub fn new(handle: WindowId, title: &str) -> Self {
        Self {
            handle,
            title: normalize(title),
        }
    }

    /// Returns whether the title contains `needle`.
    ///
    /// `needle` must already be normalized. An empty needle matches every
    /// window.
    pub fn title_contains(&self, needle: &str) -> bool {
        self.title.contains(needle)
    }
}
