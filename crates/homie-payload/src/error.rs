use alloc::borrow::Cow;

/// All possible error kinds.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// An enumeration was configured without any usable label.
    EmptyEnumeration,
    /// An enumeration label contains the label separator.
    InvalidLabel,
    /// A color format name is neither `rgb` nor `hsv`.
    UnknownColorFormat,
    /// A datatype name does not belong to the convention.
    UnknownDatatype,
    /// A datatype requires a format, but none was provided.
    MissingFormat,
    /// A payload does not respect the grammar of its datatype.
    InvalidPayload,
}

impl ErrorKind {
    pub(crate) const fn description(self) -> &'static str {
        match self {
            Self::EmptyEnumeration => "Empty Enumeration",
            Self::InvalidLabel => "Invalid Label",
            Self::UnknownColorFormat => "Unknown Color Format",
            Self::UnknownDatatype => "Unknown Datatype",
            Self::MissingFormat => "Missing Format",
            Self::InvalidPayload => "Invalid Payload",
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.description())
    }
}

/// A payload error.
#[derive(PartialEq)]
pub struct Error {
    kind: ErrorKind,
    description: Cow<'static, str>,
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.kind, self.description)
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.kind, self.description)
    }
}

impl core::error::Error for Error {}

impl Error {
    /// Creates an [`Error`] from an [`ErrorKind`] and a description.
    #[inline]
    pub fn new(kind: ErrorKind, description: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            description: description.into(),
        }
    }

    /// Returns the [`ErrorKind`].
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// A specialized [`Result`] type for [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
