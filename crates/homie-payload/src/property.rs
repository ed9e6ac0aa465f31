use alloc::string::{String, ToString};

use log::debug;

use serde::Serialize;

use crate::boolean::Boolean;
use crate::color::{Color, ColorFormat};
use crate::datatype::Datatype;
use crate::enumeration::{Enumeration, Labels};
use crate::error::{Error, ErrorKind, Result};
use crate::float::Float;
use crate::integer::Integer;
use crate::payload::Payload;
use crate::text::Text;

/// The format of a property payload.
///
/// It pairs a [`Datatype`] with the configuration its payloads need, and
/// corresponds to the `$datatype` and `$format` attributes of a property.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "deserialize", derive(serde::Deserialize))]
#[serde(tag = "datatype", content = "format", rename_all = "lowercase")]
pub enum PropertyFormat {
    /// Free text.
    String,
    /// Integer.
    Integer,
    /// Float.
    Float,
    /// Boolean.
    Boolean,
    /// One label out of the given [`Labels`].
    Enum(Labels),
    /// A color in the given [`ColorFormat`].
    Color(ColorFormat),
}

impl PropertyFormat {
    /// Creates a [`PropertyFormat`] from the payloads of the `$datatype` and
    /// `$format` attributes.
    ///
    /// The format is ignored for datatypes which do not need one.
    ///
    /// # Errors
    ///
    /// An error is returned when the datatype is unknown, when an `enum` or
    /// `color` datatype comes without a format, or when that format is not
    /// valid.
    pub fn from_attributes(datatype: &str, format: Option<&str>) -> Result<Self> {
        let datatype = Datatype::from_name(datatype)?;

        let format = match (datatype.requires_format(), format) {
            (true, None) => {
                return Err(Error::new(
                    ErrorKind::MissingFormat,
                    alloc::format!("the `{datatype}` datatype requires a format"),
                ));
            }
            (false, Some(format)) => {
                debug!("Ignoring format {format:?} of the `{datatype}` datatype");
                ""
            }
            (_, format) => format.unwrap_or_default(),
        };

        Ok(match datatype {
            Datatype::String => Self::String,
            Datatype::Integer => Self::Integer,
            Datatype::Float => Self::Float,
            Datatype::Boolean => Self::Boolean,
            Datatype::Enum => Self::Enum(Labels::from_format(format)?),
            Datatype::Color => Self::Color(ColorFormat::from_name(format)?),
        })
    }

    /// Returns the [`Datatype`].
    #[must_use]
    pub const fn datatype(&self) -> Datatype {
        match self {
            Self::String => Datatype::String,
            Self::Integer => Datatype::Integer,
            Self::Float => Datatype::Float,
            Self::Boolean => Datatype::Boolean,
            Self::Enum(_) => Datatype::Enum,
            Self::Color(_) => Datatype::Color,
        }
    }

    /// Returns the payload of the `$format` attribute.
    ///
    /// The return value is [`None`] for datatypes without a format.
    #[must_use]
    pub fn format_attribute(&self) -> Option<String> {
        match self {
            Self::Enum(labels) => Some(labels.format()),
            Self::Color(format) => Some(format.name().to_string()),
            Self::String | Self::Integer | Self::Float | Self::Boolean => None,
        }
    }

    /// Creates a [`PropertyValue`] with the default value of this format.
    #[must_use]
    pub fn payload(&self) -> PropertyValue {
        match self {
            Self::String => PropertyValue::String(Text::default()),
            Self::Integer => PropertyValue::Integer(Integer::default()),
            Self::Float => PropertyValue::Float(Float::default()),
            Self::Boolean => PropertyValue::Boolean(Boolean::default()),
            Self::Enum(labels) => PropertyValue::Enum(Enumeration::new(labels.clone())),
            Self::Color(format) => PropertyValue::Color(Color::new(*format)),
        }
    }
}

/// A property payload whose kind is chosen at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// A [`Text`] payload.
    String(Text),
    /// An [`Integer`] payload.
    Integer(Integer),
    /// A [`Float`] payload.
    Float(Float),
    /// A [`Boolean`] payload.
    Boolean(Boolean),
    /// An [`Enumeration`] payload.
    Enum(Enumeration),
    /// A [`Color`] payload.
    Color(Color),
}

// Runs the same expression on the payload of every variant.
macro_rules! each_kind {
    ($value:expr, $payload:ident => $body:expr) => {
        match $value {
            PropertyValue::String($payload) => $body,
            PropertyValue::Integer($payload) => $body,
            PropertyValue::Float($payload) => $body,
            PropertyValue::Boolean($payload) => $body,
            PropertyValue::Enum($payload) => $body,
            PropertyValue::Color($payload) => $body,
        }
    };
}

impl core::fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        each_kind!(self, payload => core::fmt::Display::fmt(payload, f))
    }
}

impl PropertyValue {
    /// Returns the [`Datatype`] of the payload.
    #[must_use]
    pub const fn datatype(&self) -> Datatype {
        match self {
            Self::String(_) => Text::DATATYPE,
            Self::Integer(_) => Integer::DATATYPE,
            Self::Float(_) => Float::DATATYPE,
            Self::Boolean(_) => Boolean::DATATYPE,
            Self::Enum(_) => Enumeration::DATATYPE,
            Self::Color(_) => Color::DATATYPE,
        }
    }

    /// Checks whether a raw payload is legal for this property.
    #[must_use]
    pub fn validate(&self, candidate: &str) -> bool {
        each_kind!(self, payload => payload.validate(candidate))
    }

    /// Replaces the stored value with the one described by a raw payload.
    ///
    /// Returns `false`, leaving the payload untouched, when the raw payload
    /// is invalid.
    pub fn set(&mut self, candidate: &str) -> bool {
        each_kind!(self, payload => payload.set(candidate))
    }

    /// Returns the canonical payload of the stored value.
    #[must_use]
    pub fn render(&self) -> String {
        each_kind!(self, payload => payload.render())
    }

    /// Checks whether the stored value is a legal payload for this property.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        each_kind!(self, payload => payload.is_valid())
    }
}

impl From<Text> for PropertyValue {
    fn from(payload: Text) -> Self {
        Self::String(payload)
    }
}

impl From<Integer> for PropertyValue {
    fn from(payload: Integer) -> Self {
        Self::Integer(payload)
    }
}

impl From<Float> for PropertyValue {
    fn from(payload: Float) -> Self {
        Self::Float(payload)
    }
}

impl From<Boolean> for PropertyValue {
    fn from(payload: Boolean) -> Self {
        Self::Boolean(payload)
    }
}

impl From<Enumeration> for PropertyValue {
    fn from(payload: Enumeration) -> Self {
        Self::Enum(payload)
    }
}

impl From<Color> for PropertyValue {
    fn from(payload: Color) -> Self {
        Self::Color(payload)
    }
}
