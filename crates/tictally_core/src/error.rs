//! Engine error types.

/// Error returned for requests that cannot address the board at all.
///
/// Legal-but-refused moves (occupied square, finished round) are not errors;
/// they come back as [`Placement::Ignored`](crate::Placement::Ignored).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum EngineError {
    /// Board index outside 0-8.
    #[display("Position index {} out of range (must be 0-8)", index)]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
    },
}
