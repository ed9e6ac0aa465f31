use serde::Serialize;

use crate::error::{Error, ErrorKind, Result};

/// All [`Datatype`]s.
pub const ALL_DATATYPES: &[Datatype] = &[
    Datatype::String,
    Datatype::Integer,
    Datatype::Float,
    Datatype::Boolean,
    Datatype::Enum,
    Datatype::Color,
];

/// All datatypes a property payload may have.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[cfg_attr(feature = "deserialize", derive(serde::Deserialize))]
#[serde(rename_all = "lowercase")]
pub enum Datatype {
    /// Free UTF-8 text.
    String,
    /// A 64-bit signed whole number.
    Integer,
    /// A 64-bit floating point number.
    Float,
    /// Either `true` or `false`.
    Boolean,
    /// One label out of a closed set.
    Enum,
    /// Three comma-separated color components.
    Color,
}

impl core::fmt::Debug for Datatype {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl core::fmt::Display for Datatype {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl core::str::FromStr for Datatype {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Self::from_name(name)
    }
}

impl Datatype {
    /// Returns the [`Datatype`] name, as published in the `$datatype`
    /// attribute.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::Enum => "enum",
            Self::Color => "color",
        }
    }

    /// Returns the [`Datatype`] associated with the given name.
    ///
    /// # Errors
    ///
    /// The name must match one of the convention names exactly, case
    /// included.
    pub fn from_name(name: &str) -> Result<Self> {
        ALL_DATATYPES
            .iter()
            .find(|datatype| datatype.name() == name)
            .copied()
            .ok_or_else(|| {
                Error::new(
                    ErrorKind::UnknownDatatype,
                    alloc::format!("`{name}` is not a datatype"),
                )
            })
    }

    /// Whether the [`Datatype`] needs a `$format` attribute to describe its
    /// payloads.
    #[must_use]
    pub const fn requires_format(&self) -> bool {
        matches!(self, Self::Enum | Self::Color)
    }
}
