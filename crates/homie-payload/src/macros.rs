// Constructors and conversions shared by the payload kinds which need no
// configuration. The kind module implements `Display` and `Payload`.
macro_rules! scalar_payload {
    (
        $(#[$attr:meta])*
        pub struct $name:ident($value:ty);
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            value: $value,
        }

        impl $name {
            #[doc = concat!("Creates a [`", stringify!($name), "`] storing the given value.")]
            #[doc = ""]
            #[doc = "A value which is not representable is logged and replaced by the default one."]
            #[must_use]
            pub fn new(value: $value) -> Self {
                let mut payload = Self::default();
                if !$crate::payload::Payload::set_value(&mut payload, value) {
                    log::warn!(
                        "Unrepresentable {} value, falling back to {payload}",
                        <Self as $crate::payload::Payload>::DATATYPE
                    );
                }
                payload
            }

            #[doc = concat!("Creates a [`", stringify!($name), "`] from a raw payload.")]
            #[doc = ""]
            #[doc = "An invalid payload is logged and replaced by the default value."]
            #[must_use]
            pub fn from_payload(candidate: &str) -> Self {
                let mut payload = Self::default();
                if !$crate::payload::Payload::set(&mut payload, candidate) {
                    log::warn!(
                        "Invalid {} payload {candidate:?}, falling back to {payload}",
                        <Self as $crate::payload::Payload>::DATATYPE
                    );
                }
                payload
            }

            #[doc = "Consumes the payload and returns the stored value."]
            #[must_use]
            #[inline]
            pub fn into_value(self) -> $value {
                self.value
            }
        }

        impl From<$value> for $name {
            fn from(value: $value) -> Self {
                Self::new(value)
            }
        }

        impl core::str::FromStr for $name {
            type Err = $crate::error::Error;

            fn from_str(candidate: &str) -> $crate::error::Result<Self> {
                let mut payload = Self::default();
                if $crate::payload::Payload::set(&mut payload, candidate) {
                    Ok(payload)
                } else {
                    Err($crate::error::Error::new(
                        $crate::error::ErrorKind::InvalidPayload,
                        alloc::format!(
                            "{candidate:?} is not a valid {} payload",
                            <Self as $crate::payload::Payload>::DATATYPE
                        ),
                    ))
                }
            }
        }
    };
}

pub(crate) use scalar_payload;
