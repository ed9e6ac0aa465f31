//! Typed payloads for the Homie MQTT device-description convention.
//!
//! Every Homie property is published as a UTF-8 text payload whose shape
//! depends on the property datatype. This crate provides APIs to:
//!
//! - Validate a raw payload received from the network against the grammar
//!   of one of the six convention datatypes: `string`, `integer`, `float`,
//!   `boolean`, `enum`, and `color`.
//! - Update a typed value from a raw payload. An update either replaces the
//!   stored value or leaves it untouched, and always reports which of the
//!   two happened.
//! - Render a typed value into its canonical payload, which is always
//!   accepted by the grammar of its own datatype.
//! - Describe the format of a property, as announced through its
//!   `$datatype` and `$format` attributes, and build a payload whose kind is
//!   chosen at runtime from that description.
//!
//! Payloads carry no transport logic: they only consume and produce strings.
//! Topics, devices, nodes, and MQTT sessions are left to the caller.
//!
//! A deployment which never receives format descriptions from the network
//! can avoid importing deserialization functions by disabling the
//! `deserialize` feature at compile time.
//!
//! This crate can be compiled for both `std` and `no_std` environments.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![no_std]

extern crate alloc;

mod grammar;
mod macros;

/// Boolean payloads.
pub mod boolean;
/// Color payloads in the `rgb` and `hsv` formats.
pub mod color;
/// Property datatypes.
pub mod datatype;
/// Enumeration payloads over a closed set of labels.
pub mod enumeration;
/// Error management.
pub mod error;
/// Floating point payloads.
pub mod float;
/// Integer payloads.
pub mod integer;
/// The contract shared by every payload kind.
pub mod payload;
/// Property formats and runtime-selected payloads.
pub mod property;
/// Free text payloads.
pub mod text;

pub use boolean::Boolean;
pub use color::{Color, ColorFormat, ColorTuple};
pub use datatype::Datatype;
pub use enumeration::{Enumeration, Labels};
pub use error::{Error, ErrorKind, Result};
pub use float::Float;
pub use integer::Integer;
pub use payload::Payload;
pub use property::{PropertyFormat, PropertyValue};
pub use text::Text;

#[cfg(test)]
#[cfg(feature = "deserialize")]
pub(crate) fn serialize<T: serde::Serialize>(value: T) -> serde_json::Value {
    serde_json::to_value(value).unwrap()
}

#[cfg(test)]
#[cfg(feature = "deserialize")]
pub(crate) fn deserialize<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> T {
    serde_json::from_value(value).unwrap()
}
