use crate::datatype::Datatype;
use crate::macros::scalar_payload;
use crate::payload::Payload;

const TRUE: &str = "true";
const FALSE: &str = "false";

scalar_payload! {
    /// A `boolean` payload.
    ///
    /// Only the lowercase literals `true` and `false` are valid payloads.
    #[derive(Copy, Eq, Hash)]
    pub struct Boolean(bool);
}

impl core::fmt::Display for Boolean {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(if self.value { TRUE } else { FALSE })
    }
}

impl Payload for Boolean {
    type Value = bool;

    const DATATYPE: Datatype = Datatype::Boolean;

    fn parse(&self, candidate: &str) -> Option<bool> {
        match candidate {
            TRUE => Some(true),
            FALSE => Some(false),
            _ => None,
        }
    }

    fn set_value(&mut self, value: bool) -> bool {
        self.value = value;
        true
    }

    fn value(&self) -> &bool {
        &self.value
    }
}
