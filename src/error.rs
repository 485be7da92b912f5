//! Error types for the prettylink library.

use thiserror::Error;

/// Errors surfaced by the renderer.
///
/// Host lookups are best-effort by contract and never produce errors here;
/// the only hard failure is asking for a renderer without a content handle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PrettyLinkError {
    /// No content handle was supplied to [`PrettyLink::create`].
    ///
    /// [`PrettyLink::create`]: crate::PrettyLink::create
    #[error("no content handle supplied")]
    MissingContent,
}

/// Convenience result type for prettylink operations.
pub type Result<T> = std::result::Result<T, PrettyLinkError>;
