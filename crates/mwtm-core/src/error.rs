use std::path::PathBuf;

/// Errors that end a run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot open display {display}: {reason}")]
    Connection { display: String, reason: String },

    #[error(transparent)]
    Enumeration(#[from] EnumerationError),

    #[error("{}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },
}

/// The desktop could not be snapshotted.
#[derive(Debug, thiserror::Error)]
pub enum EnumerationError {
    #[error("cannot get client list properties (_NET_CLIENT_LIST or _WIN_CLIENT_LIST)")]
    ClientList,

    #[error("cannot get monitors: {reason}")]
    Monitors { reason: String },
}

/// Invalid positional arguments.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgsError {
    #[error("expected at least one 'title' monitor pair")]
    Empty,

    #[error("expected 'title' monitor pairs, got {count} arguments")]
    Odd { count: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
