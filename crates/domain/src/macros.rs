//! Macro for implementing numeric discriminant conversions for trait enums
//!
//! The upstream API encodes plant trait fields (flowering, fruit bearing,
//! reproduction, viability) as small integers. This macro generates the
//! `TryFrom<u8>` / `From<Enum> for u8` pair that serde uses via
//! `#[serde(try_from = "u8", into = "u8")]`, so unknown discriminants are
//! rejected at the deserialization boundary instead of being carried around
//! as untyped numbers.

/// Implements `TryFrom<u8>` and `From<$enum_name> for u8` for trait enums
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $value` - Mapping of enum variants to their wire
///   discriminants
///
/// Parsing an unmapped discriminant yields a descriptive error naming the
/// enum, which surfaces as a deserialization failure on the response body.
#[macro_export]
macro_rules! impl_trait_discriminants {
    ($enum_name:ident { $($variant:ident => $value:expr),+ $(,)? }) => {
        impl TryFrom<u8> for $enum_name {
            type Error = String;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    $($value => Ok(Self::$variant),)+
                    other => Err(format!(
                        "Invalid {} discriminant: {}",
                        stringify!($enum_name),
                        other
                    )),
                }
            }
        }

        impl From<$enum_name> for u8 {
            fn from(value: $enum_name) -> Self {
                match value {
                    $($enum_name::$variant => $value,)+
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    // Test enum for macro validation
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(try_from = "u8", into = "u8")]
    enum TestTrait {
        Zero,
        One,
    }

    impl_trait_discriminants!(TestTrait {
        Zero => 0,
        One => 1,
    });

    #[test]
    fn maps_known_discriminants_both_ways() {
        assert_eq!(TestTrait::try_from(0), Ok(TestTrait::Zero));
        assert_eq!(TestTrait::try_from(1), Ok(TestTrait::One));
        assert_eq!(u8::from(TestTrait::One), 1);
    }

    #[test]
    fn rejects_unknown_discriminant() {
        let err = TestTrait::try_from(7).unwrap_err();
        assert!(err.contains("TestTrait"));
        assert!(err.contains('7'));
    }

    #[test]
    fn serde_rejects_unknown_discriminant() {
        let result: Result<TestTrait, _> = serde_json::from_str("42");
        assert!(result.is_err());
    }
}
