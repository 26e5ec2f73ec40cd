use thiserror::Error;

/// Errors raised while interpreting animation configuration.
///
/// Missing page elements are not errors at this level; the controller skips
/// the affected feature and records it in its [`MountReport`](crate::MountReport).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MotionError {
    #[error("missing attachment point `{0}`")]
    MissingAttachment(&'static str),

    #[error("invalid trigger position `{0}` (expected \"<top|center|bottom> <percent|top|center|bottom>\")")]
    InvalidPosition(String),

    #[error("invalid toggle actions `{0}` (expected four of play|pause|resume|reset|restart|complete|reverse|none)")]
    InvalidToggleActions(String),

    #[error("invalid color `{0}`")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, MotionError>;
