//! Loader errors.

use std::{error, result};

/// Error type returned by a [`ContextBootstrapper`].
///
/// [`ContextBootstrapper`]: ../context/trait.ContextBootstrapper.html
pub type BootstrapError = Box<dyn error::Error + Send + Sync>;

/// Convenience alias.
pub type Result<T> = result::Result<T, Error>;

/// Fatal loader conditions.
///
/// A symbol the driver does not export is *not* an error; it simply leaves
/// its slot unbound.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No graphics context was current and none could be created or made
    /// current, so address resolution was not possible.
    #[error("no graphics context could be made current: {0}")]
    ContextUnavailable(#[source] BootstrapError),

    /// The same symbol name was declared twice in one table.
    #[error("entry point `{0}` is declared more than once")]
    DuplicateSymbol(&'static str),

    /// A binding was requested, or offered, with a function type other than
    /// the one its descriptor declares.
    #[error("entry point `{name}` is declared as `{declared}` but was used as `{requested}`")]
    SignatureMismatch {
        /// Symbol name.
        name: String,

        /// Signature from the descriptor.
        declared: String,

        /// Rust type of the offending binding.
        requested: String,
    },
}
