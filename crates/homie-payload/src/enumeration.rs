use alloc::string::{String, ToString};
use alloc::vec::Vec;

use hashbrown::DefaultHashBuilder;

use indexmap::set::{IndexSet, Iter};

use log::{debug, warn};

use serde::Serialize;

use crate::datatype::Datatype;
use crate::error::{Error, ErrorKind, Result};
use crate::payload::Payload;

// Separator between labels in the `$format` attribute.
const LABEL_SEPARATOR: char = ',';

/// The closed set of labels accepted by an [`Enumeration`].
///
/// Labels are trimmed of leading and trailing whitespace, and kept in
/// declaration order. Duplicated labels are stored only once, and labels
/// which are blank after trimming are discarded.
///
/// Two sets of labels are equal when they hold the same labels in the same
/// order.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "deserialize", derive(serde::Deserialize))]
#[cfg_attr(feature = "deserialize", serde(try_from = "Vec<String>"))]
pub struct Labels(IndexSet<String, DefaultHashBuilder>);

impl Labels {
    /// Creates [`Labels`] from a sequence of labels.
    ///
    /// # Errors
    ///
    /// At least one label must be non-blank, otherwise an
    /// [`ErrorKind::EmptyEnumeration`] error is returned.
    /// A label containing a comma would be split apart in the `$format`
    /// attribute, so it returns an [`ErrorKind::InvalidLabel`] error.
    pub fn new<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = IndexSet::with_hasher(DefaultHashBuilder::default());
        for label in labels {
            let label = label.as_ref().trim();
            if label.contains(LABEL_SEPARATOR) {
                return Err(Error::new(
                    ErrorKind::InvalidLabel,
                    alloc::format!("label {label:?} contains the `{LABEL_SEPARATOR}` separator"),
                ));
            }
            if !label.is_empty() && !set.insert(label.to_string()) {
                debug!("Ignoring duplicated label {label:?}");
            }
        }

        if set.is_empty() {
            return Err(Error::new(
                ErrorKind::EmptyEnumeration,
                "an enumeration requires at least one non-blank label",
            ));
        }

        Ok(Self(set))
    }

    /// Creates [`Labels`] from the payload of a `$format` attribute, which
    /// lists the labels separated by commas.
    ///
    /// # Errors
    ///
    /// At least one label must be non-blank, otherwise an
    /// [`ErrorKind::EmptyEnumeration`] error is returned.
    #[inline]
    pub fn from_format(format: &str) -> Result<Self> {
        Self::new(format.split(LABEL_SEPARATOR))
    }

    /// Checks whether a label belongs to the set.
    ///
    /// The comparison is exact: it is case-sensitive and the label is not
    /// trimmed.
    #[must_use]
    #[inline]
    pub fn contains(&self, label: &str) -> bool {
        self.0.contains(label)
    }

    /// Returns the number of labels.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks whether the set is empty.
    ///
    /// Always `false` for labels built through the public constructors.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the labels in declaration order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, String> {
        self.0.iter()
    }

    /// Returns the payload of the `$format` attribute describing the labels.
    #[must_use]
    pub fn format(&self) -> String {
        let mut format = String::new();
        for (index, label) in self.0.iter().enumerate() {
            if index > 0 {
                format.push(LABEL_SEPARATOR);
            }
            format.push_str(label);
        }
        format
    }
}

impl PartialEq for Labels {
    fn eq(&self, other: &Self) -> bool {
        self.0.iter().eq(other.0.iter())
    }
}

impl Eq for Labels {}

impl<'a> IntoIterator for &'a Labels {
    type Item = &'a String;
    type IntoIter = Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<Vec<String>> for Labels {
    type Error = Error;

    fn try_from(labels: Vec<String>) -> Result<Self> {
        Self::new(labels)
    }
}

/// An `enum` payload.
///
/// The payload must exactly match one of the configured [`Labels`].
/// An enumeration has no meaningful default label: a newly created
/// enumeration stores an empty label and stays invalid until a label is
/// successfully set.
#[derive(Debug, Clone)]
pub struct Enumeration {
    labels: Labels,
    value: String,
}

impl PartialEq for Enumeration {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl core::fmt::Display for Enumeration {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.value)
    }
}

impl Enumeration {
    /// Creates an unset [`Enumeration`] over the given [`Labels`].
    #[must_use]
    pub const fn new(labels: Labels) -> Self {
        Self {
            labels,
            value: String::new(),
        }
    }

    /// Creates an unset [`Enumeration`] from a sequence of labels.
    ///
    /// # Errors
    ///
    /// At least one label must be non-blank, otherwise an
    /// [`ErrorKind::EmptyEnumeration`] error is returned.
    #[inline]
    pub fn from_labels<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Labels::new(labels).map(Self::new)
    }

    /// Creates an [`Enumeration`] over the given [`Labels`] from a raw
    /// payload.
    ///
    /// An invalid payload is logged and the enumeration is left unset.
    #[must_use]
    pub fn from_payload(labels: Labels, candidate: &str) -> Self {
        let mut enumeration = Self::new(labels);
        if !enumeration.set(candidate) {
            warn!("Invalid enum payload {candidate:?}, the enumeration stays unset");
        }
        enumeration
    }

    /// Returns the configured [`Labels`].
    #[must_use]
    pub const fn labels(&self) -> &Labels {
        &self.labels
    }
}

impl Payload for Enumeration {
    type Value = String;

    const DATATYPE: Datatype = Datatype::Enum;

    fn parse(&self, candidate: &str) -> Option<String> {
        self.labels
            .contains(candidate)
            .then(|| candidate.to_string())
    }

    fn set_value(&mut self, value: String) -> bool {
        if !self.labels.contains(&value) {
            return false;
        }
        self.value = value;
        true
    }

    fn value(&self) -> &String {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec::Vec;

    use crate::error::ErrorKind;
    use crate::payload::Payload;

    use super::{Enumeration, Labels};

    const COLORS: [&str; 5] = ["Red", "Green", "Blue", " White ", "blue and green"];

    fn colors() -> Enumeration {
        Enumeration::from_labels(COLORS).unwrap()
    }

    #[test]
    fn trimmed_labels() {
        let labels = Labels::new(["  a", "b  ", "\tc\t", "a", "", "   "]).unwrap();

        assert_eq!(labels.len(), 3);
        assert_eq!(labels.iter().collect::<Vec<_>>(), ["a", "b", "c"]);
        assert_eq!(labels.format(), "a,b,c");

        assert_eq!(Labels::from_format("on, off ,auto"), Labels::new(["on", "off", "auto"]));
    }

    #[test]
    fn ordered_labels() {
        let ab = Labels::from_format("a,b").unwrap();
        let ba = Labels::from_format("b,a").unwrap();

        assert_ne!(ab, ba);
        assert_ne!(ab.format(), ba.format());
        assert_eq!(ab, Labels::new([" a", "b", "a"]).unwrap());
    }

    #[test]
    fn labels_with_separator() {
        assert_eq!(
            Labels::new(["a,b"]).map_err(|e| e.kind()),
            Err(ErrorKind::InvalidLabel)
        );
        assert_eq!(
            Enumeration::from_labels(["on", " off,auto "]).map_err(|e| e.kind()),
            Err(ErrorKind::InvalidLabel)
        );
    }

    #[test]
    fn empty_labels() {
        let no_labels: [&str; 0] = [];
        assert_eq!(
            Labels::new(no_labels).map_err(|e| e.kind()),
            Err(ErrorKind::EmptyEnumeration)
        );
        assert_eq!(
            Enumeration::from_labels([" ", ""]).map_err(|e| e.kind()),
            Err(ErrorKind::EmptyEnumeration)
        );
        assert_eq!(
            Labels::from_format(",,").map_err(|e| e.kind()),
            Err(ErrorKind::EmptyEnumeration)
        );
    }

    #[test]
    fn validate_enumeration() {
        let value = colors();

        assert!(value.validate("Red"));
        assert!(value.validate("Green"));
        assert!(value.validate("Blue"));
        assert!(value.validate("White"));
        assert!(value.validate("blue and green"));

        assert!(!value.validate("red"));
        assert!(!value.validate("RED"));
        assert!(!value.validate("black"));
        assert!(!value.validate(" White "));
        assert!(!value.validate(""));
        assert!(!value.validate(" "));
    }

    #[test]
    fn set_enumeration() {
        let mut value = colors();
        assert_eq!(value.value(), "");
        assert_eq!(value.render(), "");
        assert!(!value.is_valid());

        assert!(value.set("Red"));
        assert_eq!(value.value(), "Red");
        assert_eq!(value.render(), "Red");
        assert!(value.is_valid());

        // Setting the same label again changes nothing.
        assert!(value.set("Red"));
        assert_eq!(value.value(), "Red");

        assert!(!value.set("black"));
        assert_eq!(value.value(), "Red");
        assert_eq!(value.render(), "Red");
        assert!(value.is_valid());

        assert!(value.set("blue and green"));
        assert_eq!(value.value(), "blue and green");
        assert_eq!(value.render(), "blue and green");
        assert!(value.is_valid());

        assert!(!value.set_value("Purple".to_string()));
        assert!(value.set_value("White".to_string()));
        assert_eq!(value.render(), "White");
    }

    #[test]
    fn compare_enumeration() {
        let labels = colors().labels().clone();

        assert_eq!(
            Enumeration::from_payload(labels.clone(), "Blue"),
            Enumeration::from_payload(labels.clone(), "Blue")
        );
        assert_ne!(
            Enumeration::from_payload(labels.clone(), "Blue"),
            Enumeration::from_payload(labels.clone(), "Green")
        );

        let unset = Enumeration::from_payload(labels, "Purple");
        assert_eq!(unset.value(), "");
        assert!(!unset.is_valid());
    }
}

#[cfg(test)]
#[cfg(feature = "deserialize")]
mod serde_tests {
    use crate::{deserialize, serialize};

    use super::Labels;

    #[test]
    fn test_labels() {
        let labels = Labels::new(["Red", " Green "]).unwrap();

        assert_eq!(serialize(&labels), serde_json::json!(["Red", "Green"]));
        assert_eq!(deserialize::<Labels>(serialize(&labels)), labels);

        // Deserialized labels are trimmed as well.
        assert_eq!(
            deserialize::<Labels>(serde_json::json!([" Red", "Green ", "Red"])),
            labels
        );
        assert!(serde_json::from_value::<Labels>(serde_json::json!([" "])).is_err());
        assert!(serde_json::from_value::<Labels>(serde_json::json!(["a,b"])).is_err());
    }
}
