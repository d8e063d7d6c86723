use alloc::string::String;

/// All errors that can occur while resolving a converter.
///
/// Once a converter has been resolved, converting an element cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The descriptor's source type or the requested target kind has no
    /// entry in the conversion table. Malformed descriptors land here too.
    #[error("unable to handle buffer type '{descriptor}'")]
    UnsupportedConversion {
        /// The descriptor exactly as the caller supplied it.
        descriptor: String,
    },
}

impl Error {
    pub(crate) fn unsupported(descriptor: &str) -> Self {
        Error::UnsupportedConversion {
            descriptor: descriptor.into(),
        }
    }

    /// The descriptor string that could not be handled.
    pub fn descriptor(&self) -> &str {
        match self {
            Error::UnsupportedConversion { descriptor } => descriptor,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
