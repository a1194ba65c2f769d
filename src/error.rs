//! Error types for kham.

/// Errors that can occur during segmentation.
///
/// With the bundled dictionary and boundary oracles none of the contract
/// variants can occur; they exist for user-supplied collaborators that break
/// their contracts.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A boundary oracle returned an unusable offset set.
    #[error("malformed boundary set for text of {len} bytes: {reason}")]
    MalformedBoundaries {
        /// Length of the text the oracle was asked about.
        len: usize,
        /// What was wrong with the set.
        reason: String,
    },

    /// A dictionary returned a word that is not a non-empty prefix of the
    /// text it was queried with.
    #[error("dictionary returned {word:?} at offset {offset}, which is not a prefix of the remaining text")]
    DictionaryContract {
        /// Offset the dictionary was queried at.
        offset: usize,
        /// The offending word.
        word: String,
    },

    /// No graph path leads from the emission cursor to the resolved offset.
    #[error("no path from offset {from} to offset {to} in the segmentation graph")]
    UnreachableOffset {
        /// Emission cursor.
        from: usize,
        /// Offset that could not be reached.
        to: usize,
    },

    /// Safe-mode window parameters that cannot make progress.
    #[error("invalid safe mode window: {0}")]
    InvalidSafeMode(&'static str),

    /// Amount that cannot be read out as baht.
    #[error("invalid amount: {0}")]
    InvalidAmount(f64),

    /// Reading a word list failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for kham operations.
pub type Result<T> = std::result::Result<T, Error>;
