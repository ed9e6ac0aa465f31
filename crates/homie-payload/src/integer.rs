use crate::datatype::Datatype;
use crate::grammar::is_integer_literal;
use crate::macros::scalar_payload;
use crate::payload::Payload;

scalar_payload! {
    /// An `integer` payload.
    ///
    /// The payload is an optional `-` followed by decimal digits, and
    /// nothing else. Any value in the `i64` range is accepted.
    #[derive(Copy, Eq, Hash)]
    pub struct Integer(i64);
}

impl core::fmt::Display for Integer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.value, f)
    }
}

impl Payload for Integer {
    type Value = i64;

    const DATATYPE: Datatype = Datatype::Integer;

    fn parse(&self, candidate: &str) -> Option<i64> {
        // `i64::from_str` also accepts a leading `+`.
        if !is_integer_literal(candidate) {
            return None;
        }
        candidate.parse().ok()
    }

    fn set_value(&mut self, value: i64) -> bool {
        self.value = value;
        true
    }

    fn value(&self) -> &i64 {
        &self.value
    }
}
