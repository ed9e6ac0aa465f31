use alloc::string::{String, ToString};

use log::debug;

use crate::datatype::Datatype;

/// The value-holder contract shared by every payload kind.
///
/// A payload stores exactly one typed value. Raw payloads received from the
/// network are checked against the grammar of the kind before replacing the
/// stored value: an update either succeeds entirely or leaves the payload
/// untouched.
///
/// The canonical payload of a kind is its [`core::fmt::Display`] output,
/// and it is always accepted by [`Payload::validate`] as long as the stored
/// value is valid.
pub trait Payload: core::fmt::Display {
    /// The typed value stored by the payload.
    type Value;

    /// The [`Datatype`] of the payload.
    const DATATYPE: Datatype;

    /// Parses a raw payload into a typed value.
    ///
    /// Returns [`None`] when the raw payload does not respect the grammar of
    /// this kind or is out of range.
    fn parse(&self, candidate: &str) -> Option<Self::Value>;

    /// Replaces the stored value with a typed value.
    ///
    /// Returns `false`, leaving the payload untouched, when the value is
    /// not representable by this kind.
    fn set_value(&mut self, value: Self::Value) -> bool;

    /// Returns the stored value.
    fn value(&self) -> &Self::Value;

    /// Checks whether a raw payload is legal for this kind.
    #[must_use]
    fn validate(&self, candidate: &str) -> bool {
        self.parse(candidate).is_some()
    }

    /// Replaces the stored value with the one described by a raw payload.
    ///
    /// Returns `false`, leaving the payload untouched, when the raw payload
    /// is invalid.
    fn set(&mut self, candidate: &str) -> bool {
        if let Some(value) = self.parse(candidate) {
            self.set_value(value)
        } else {
            debug!("Rejected {} payload {candidate:?}", Self::DATATYPE);
            false
        }
    }

    /// Returns the canonical payload of the stored value.
    #[must_use]
    fn render(&self) -> String {
        self.to_string()
    }

    /// Checks whether the stored value is a legal payload for this kind.
    #[must_use]
    fn is_valid(&self) -> bool {
        self.validate(&self.render())
    }
}
