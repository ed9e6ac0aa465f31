use log::warn;

use serde::Serialize;

use crate::datatype::Datatype;
use crate::error::{Error, ErrorKind, Result};
use crate::grammar::{split_exact, whole_number_or_zero};
use crate::payload::Payload;

// Separator between color components.
const COMPONENT_SEPARATOR: char = ',';

/// All [`ColorFormat`]s.
pub const ALL_COLOR_FORMATS: &[ColorFormat] = &[ColorFormat::Rgb, ColorFormat::Hsv];

/// The formats of a color payload.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[cfg_attr(feature = "deserialize", derive(serde::Deserialize))]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    /// Red, green and blue components, each in `0..=255`.
    Rgb,
    /// Hue in `0..=360`, saturation and value in `0..=100`.
    Hsv,
}

impl core::fmt::Debug for ColorFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl core::fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl core::str::FromStr for ColorFormat {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Self::from_name(name)
    }
}

impl ColorFormat {
    /// Returns the [`ColorFormat`] name, as published in the `$format`
    /// attribute.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Hsv => "hsv",
        }
    }

    /// Returns the [`ColorFormat`] associated with the given name.
    ///
    /// # Errors
    ///
    /// Only `rgb` and `hsv` are recognized, any other name returns an
    /// [`ErrorKind::UnknownColorFormat`] error.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "rgb" => Ok(Self::Rgb),
            "hsv" => Ok(Self::Hsv),
            _ => Err(Error::new(
                ErrorKind::UnknownColorFormat,
                alloc::format!("`{name}` is not a color format"),
            )),
        }
    }

    /// Returns the inclusive upper bound of each component.
    ///
    /// The lower bound is always zero.
    #[must_use]
    pub const fn maxima(&self) -> ColorTuple {
        match self {
            Self::Rgb => ColorTuple(255, 255, 255),
            Self::Hsv => ColorTuple(360, 100, 100),
        }
    }

    /// Checks whether every component of a [`ColorTuple`] lies in the range
    /// of this format.
    #[must_use]
    pub const fn contains(&self, tuple: ColorTuple) -> bool {
        let maxima = self.maxima();
        tuple.0 <= maxima.0 && tuple.1 <= maxima.1 && tuple.2 <= maxima.2
    }
}

/// The three components of a color.
///
/// Their meaning depends on the [`ColorFormat`] of the payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[cfg_attr(feature = "deserialize", derive(serde::Deserialize))]
pub struct ColorTuple(pub u16, pub u16, pub u16);

impl ColorTuple {
    /// Creates a [`ColorTuple`].
    #[must_use]
    pub const fn new(first: u16, second: u16, third: u16) -> Self {
        Self(first, second, third)
    }

    /// Returns the components as an array.
    #[must_use]
    pub const fn components(&self) -> [u16; 3] {
        [self.0, self.1, self.2]
    }
}

impl From<(u16, u16, u16)> for ColorTuple {
    fn from((first, second, third): (u16, u16, u16)) -> Self {
        Self(first, second, third)
    }
}

impl core::fmt::Display for ColorTuple {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}{COMPONENT_SEPARATOR}{}{COMPONENT_SEPARATOR}{}",
            self.0, self.1, self.2
        )
    }
}

/// A `color` payload.
///
/// The payload is made of exactly three comma-separated whole numbers,
/// each within the range defined by the [`ColorFormat`]. An empty component
/// stands for zero, so `1,,3` is the same color as `1,0,3`.
///
/// Two colors are equal when their components are equal, regardless of
/// their format.
#[derive(Debug, Clone, Copy)]
pub struct Color {
    format: ColorFormat,
    value: ColorTuple,
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Color {}

impl core::fmt::Display for Color {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.value, f)
    }
}

impl Color {
    /// Creates a black [`Color`] in the given [`ColorFormat`].
    #[must_use]
    pub const fn new(format: ColorFormat) -> Self {
        Self {
            format,
            value: ColorTuple(0, 0, 0),
        }
    }

    /// Creates a [`Color`] in the given [`ColorFormat`] storing a
    /// [`ColorTuple`].
    ///
    /// A tuple out of the format range is logged and replaced by black.
    #[must_use]
    pub fn with_value(format: ColorFormat, value: impl Into<ColorTuple>) -> Self {
        let value = value.into();
        let mut color = Self::new(format);
        if !color.set_value(value) {
            warn!("Color {value} is out of the {format} range, falling back to {color}");
        }
        color
    }

    /// Creates a [`Color`] in the given [`ColorFormat`] from a raw payload.
    ///
    /// An invalid payload is logged and replaced by black.
    #[must_use]
    pub fn from_payload(format: ColorFormat, candidate: &str) -> Self {
        let mut color = Self::new(format);
        if !color.set(candidate) {
            warn!("Invalid {format} color payload {candidate:?}, falling back to {color}");
        }
        color
    }

    /// Returns the [`ColorFormat`].
    #[must_use]
    pub const fn format(&self) -> ColorFormat {
        self.format
    }
}

impl Payload for Color {
    type Value = ColorTuple;

    const DATATYPE: Datatype = Datatype::Color;

    fn parse(&self, candidate: &str) -> Option<ColorTuple> {
        let component =
            |segment: &str| whole_number_or_zero(segment).and_then(|n| u16::try_from(n).ok());

        let [first, second, third] = split_exact::<3>(candidate, COMPONENT_SEPARATOR)?;
        let tuple = ColorTuple(component(first)?, component(second)?, component(third)?);

        self.format.contains(tuple).then_some(tuple)
    }

    fn set_value(&mut self, value: ColorTuple) -> bool {
        if !self.format.contains(value) {
            return false;
        }
        self.value = value;
        true
    }

    fn value(&self) -> &ColorTuple {
        &self.value
    }
}
