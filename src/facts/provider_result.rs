use core::fmt::Display;
use std::io::Write;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum ProviderResult<T> {
    /// The operation succeeded and data was found.
    Found(T),

    /// The service answered but had no data, with the reason why.
    NotFound(Arc<str>),

    /// An error occurred during the operation.
    Error(Arc<ohno::AppError>),
}

impl<T> ProviderResult<T> {
    /// Returns a reference to the contained data if `Found`, otherwise `None`.
    #[must_use]
    pub const fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Found(data) => Some(data),
            _ => None,
        }
    }

    /// Returns the data if `Found`; otherwise writes a one-line diagnostic naming `what` and returns `None`.
    pub fn or_report(self, mut writer: impl Write, what: impl Display) -> Option<T> {
        match self {
            Self::Found(data) => Some(data),
            Self::NotFound(reason) => {
                let _ = writeln!(writer, "Error fetching {what}: {reason}");
                None
            }
            Self::Error(e) => {
                let _ = writeln!(writer, "Error fetching {what}: {e:#}");
                None
            }
        }
    }
}
