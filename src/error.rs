use super::*;

/// Failures surfaced to callers. Per-item fetch failures and processor
/// vetoes inside a collection run are deliberately not represented here:
/// the collector swallows them and keeps draining.
#[derive(Debug, Error)]
pub enum Error {
  #[error("operation cancelled")]
  Cancelled,
  #[error("http error: {0}")]
  Http(#[from] reqwest::Error),
  #[error("invalid item: {0}")]
  InvalidItem(String),
  #[error("item has no kids")]
  RootWithoutKids,
  #[error("comment {id} has no position, call set_comment_positions first")]
  UnsetPosition { id: u64 },
}
