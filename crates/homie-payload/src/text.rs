use alloc::string::String;

use crate::datatype::Datatype;
use crate::macros::scalar_payload;
use crate::payload::Payload;

scalar_payload! {
    /// A `string` payload.
    ///
    /// Any UTF-8 text is a valid payload, the empty string included.
    /// The advisory length limit of the convention is not enforced.
    #[derive(Eq, Hash)]
    pub struct Text(String);
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Self::new(value.into())
    }
}

impl core::fmt::Display for Text {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.value)
    }
}

impl Payload for Text {
    type Value = String;

    const DATATYPE: Datatype = Datatype::String;

    fn parse(&self, candidate: &str) -> Option<String> {
        Some(candidate.into())
    }

    fn set_value(&mut self, value: String) -> bool {
        self.value = value;
        true
    }

    fn value(&self) -> &String {
        &self.value
    }

    fn validate(&self, _candidate: &str) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use crate::payload::Payload;

    use super::Text;

    #[test]
    fn validate_text() {
        let text = Text::default();

        assert!(text.validate(""));
        assert!(text.validate("abc"));
        assert!(text.validate("  spaced out  "));
        assert!(text.validate("ünïcödé ✓"));
    }

    #[test]
    fn set_text() {
        let mut text = Text::default();
        assert!(text.is_valid());
        assert_eq!(text.render(), "");

        assert!(text.set("Living room"));
        assert_eq!(text.value(), "Living room");
        assert_eq!(text.render(), "Living room");
        assert!(text.is_valid());

        assert!(text.set(""));
        assert_eq!(text.value(), "");
        assert!(text.is_valid());
    }

    #[test]
    fn compare_text() {
        assert_eq!(Text::from("abc"), Text::new("abc".to_string()));
        assert_ne!(Text::from("abc"), Text::from("ABC"));
        assert_eq!("abc".parse::<Text>(), Ok(Text::from("abc")));
        assert_eq!(Text::from_payload(" x ").into_value(), " x ");
    }
}
