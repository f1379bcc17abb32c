//! Matching `(title, monitor)` requests against a desktop snapshot.
//!
//! Matching is split in two: [`plan`] is a pure function from the snapshot
//! to the list of moves, and [`dispatch`] sends those moves through a
//! [`WindowMover`]. Requests are evaluated in order and never deduplicated,
//! so a window matched by two requests is moved twice and ends up where the
//! later one puts it.

use crate::error::ArgsError;
use crate::monitor::find_by_name;
use crate::{MonitorRecord, WindowId, WindowRecord, normalize};

/// Default distance in pixels between a monitor's origin and a moved window.
pub const DEFAULT_OFFSET: Offset = Offset { x: 10, y: 10 };

/// One `(title substring, monitor name)` pair from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRequest {
    pub title: String,
    pub monitor: String,
}

impl MatchRequest {
    /// Creates a request with both sides normalized.
    pub fn new(title: &str, monitor: &str) -> Self {
        Self {
            title: normalize(title),
            monitor: normalize(monitor),
        }
    }
}

/// Parses positional arguments into requests, two at a time.
pub fn parse_pairs<S: AsRef<str>>(args: &[S]) -> Result<Vec<MatchRequest>, ArgsError> {
    if args.is_empty() {
        return Err(ArgsError::Empty);
    }
    if args.len() % 2 != 0 {
        return Err(ArgsError::Odd { count: args.len() });
    }
    Ok(args
        .chunks_exact(2)
        .map(|pair| MatchRequest::new(pair[0].as_ref(), pair[1].as_ref()))
        .collect())
}

/// Where a window lands relative to its target monitor's origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Default for Offset {
    fn default() -> Self {
        DEFAULT_OFFSET
    }
}

/// A single planned move request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub window: WindowId,
    pub title: String,
    pub monitor: String,
    pub x: i32,
    pub y: i32,
}

/// Why a request produced no moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MonitorNotFound,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MonitorNotFound => f.write_str("monitor not found"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRequest {
    pub request: MatchRequest,
    pub reason: SkipReason,
}

/// Moves to issue, in order, plus the requests that could not be resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    pub moves: Vec<Move>,
    pub skipped: Vec<SkippedRequest>,
}

/// Outcome of [`dispatch`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchReport {
    /// Number of move requests sent, repeats included.
    pub moved: usize,
    pub skipped: Vec<SkippedRequest>,
}

/// Anything that can ask the window system to move a window.
///
/// Moves are best-effort: the request is sent and not checked.
pub trait WindowMover {
    fn move_window(&self, window: WindowId, x: i32, y: i32);

    /// Pushes any buffered requests to the window system.
    fn flush(&self) {}
}

/// Resolves every request against the snapshot without moving anything.
pub fn plan(
    requests: &[MatchRequest],
    windows: &[WindowRecord],
    monitors: &[MonitorRecord],
    offset: Offset,
) -> Plan {
    let mut plan = Plan::default();

    for request in requests {
        // Requests built elsewhere may not be normalized yet.
        let title = normalize(&request.title);
        let monitor_name = normalize(&request.monitor);

        let Some(monitor) = find_by_name(monitors, &monitor_name) else {
            tracing::debug!(monitor = %monitor_name, "cannot find the monitor");
            plan.skipped.push(SkippedRequest {
                request: request.clone(),
                reason: SkipReason::MonitorNotFound,
            });
            continue;
        };

        let (x, y) = monitor.geometry.inset_origin(offset.x, offset.y);
        plan.moves.extend(
            windows
                .iter()
                .filter(|w| w.title_contains(&title))
                .map(|w| Move {
                    window: w.handle,
                    title: w.title.clone(),
                    monitor: monitor.name.clone(),
                    x,
                    y,
                }),
        );
    }

    plan
}

/// Plans the requests and sends every resulting move through `mover`.
pub fn dispatch<M: WindowMover + ?Sized>(
    requests: &[MatchRequest],
    windows: &[WindowRecord],
    monitors: &[MonitorRecord],
    mover: &M,
    offset: Offset,
) -> DispatchReport {
    let Plan { moves, skipped } = plan(requests, windows, monitors, offset);

    for m in &moves {
        tracing::debug!(
            "move window 0x{:x} ({}) to {} at {},{}",
            m.window,
            m.title,
            m.monitor,
            m.x,
            m.y
        );
        mover.move_window(m.window, m.x, m.y);
    }
    mover.flush();

    DispatchReport {
        moved: moves.len(),
        skipped,
    }
}
