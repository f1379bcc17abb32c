//! In-memory desktop used by unit tests.

use std::cell::{Cell, RefCell};

use crate::enumerate::{MonitorSource, RawMonitor};
use crate::error::EnumerationError;
use crate::property::{Property, PropertySource, PropertyType};
use crate::{Rect, WindowId, WindowMover};

const ROOT: WindowId = 0x1;

#[derive(Clone, Copy, PartialEq, Eq)]
enum ClientList {
    Modern,
    Legacy,
    Missing,
}

enum Title {
    Plain(String),
    Utf8(String),
    Missing,
}

pub struct FakeDesktop {
    client_list: ClientList,
    windows: Vec<(WindowId, Title)>,
    monitors: Option<Vec<RawMonitor>>,
    pub moves: RefCell<Vec<(WindowId, i32, i32)>>,
    pub flushes: Cell<usize>,
}

impl FakeDesktop {
    pub fn new() -> Self {
        Self {
            client_list: ClientList::Modern,
            windows: Vec::new(),
            monitors: Some(Vec::new()),
            moves: RefCell::new(Vec::new()),
            flushes: Cell::new(0),
        }
    }

    pub fn with_window(mut self, handle: WindowId, title: &str) -> Self {
        self.windows.push((handle, Title::Plain(title.into())));
        self
    }

    pub fn with_utf8_only_window(mut self, handle: WindowId, title: &str) -> Self {
        self.windows.push((handle, Title::Utf8(title.into())));
        self
    }

    pub fn with_untitled_window(mut self, handle: WindowId) -> Self {
        self.windows.push((handle, Title::Missing));
        self
    }

    pub fn with_monitor(mut self, name: &str, geometry: Rect) -> Self {
        if let Some(monitors) = self.monitors.as_mut() {
            monitors.push(RawMonitor {
                name: name.into(),
                geometry,
                primary: monitors.is_empty(),
            });
        }
        self
    }

    pub fn legacy_client_list(mut self) -> Self {
        self.client_list = ClientList::Legacy;
        self
    }

    pub fn no_client_list(mut self) -> Self {
        self.client_list = ClientList::Missing;
        self
    }

    pub fn failing_monitors(mut self) -> Self {
        self.monitors = None;
        self
    }

    fn client_list_property(&self) -> Property {
        let bytes = self
            .windows
            .iter()
            .flat_map(|(handle, _)| handle.to_ne_bytes())
            .collect();
        Property::new(32, bytes)
    }
}

impl PropertySource for FakeDesktop {
    fn root(&self) -> WindowId {
        ROOT
    }

    fn property(&self, window: WindowId, name: &str, kind: PropertyType) -> Option<Property> {
        if window == ROOT {
            return match (self.client_list, name, kind) {
                (ClientList::Modern, "_NET_CLIENT_LIST", PropertyType::Window)
                | (ClientList::Legacy, "_WIN_CLIENT_LIST", PropertyType::Cardinal) => {
                    Some(self.client_list_property())
                }
                _ => None,
            };
        }

        let (_, title) = self.windows.iter().find(|(h, _)| *h == window)?;
        match (title, name, kind) {
            (Title::Plain(t), "WM_NAME", PropertyType::String)
            | (Title::Utf8(t), "_NET_WM_NAME", PropertyType::Utf8String) => {
                Some(Property::new(8, t.as_bytes().to_vec()))
            }
            _ => None,
        }
    }
}

impl MonitorSource for FakeDesktop {
    fn monitors(&self) -> Result<Vec<RawMonitor>, EnumerationError> {
        self.monitors
            .clone()
            .ok_or_else(|| EnumerationError::Monitors {
                reason: "RandR query failed".into(),
            })
    }
}

impl WindowMover for FakeDesktop {
    fn move_window(&self, window: WindowId, x: i32, y: i32) {
        self.moves.borrow_mut().push((window, x, y));
    }

    fn flush(&self) {
        self.flushes.set(self.flushes.get() + 1);
    }
}
