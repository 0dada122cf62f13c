//! Macros for reducing boilerplate code
//!
//! This module contains declarative macros that eliminate repetitive
//! implementations across the codebase, particularly for enums that travel
//! as short lowercase tags (category names, config switches).

/// Implements `as_str`, `Display` and `FromStr` for tag enums
///
/// This macro generates:
/// - `as_str`: a `const fn` returning the canonical tag
/// - Display trait: writes the canonical tag
/// - FromStr trait: parses case-insensitive tags to enum variants
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their tags
///
/// # Example
///
/// ```rust
/// use piiarc_common::impl_tag_conversions;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// pub enum Channel {
///     Sms,
///     Email,
/// }
///
/// impl_tag_conversions!(Channel {
///     Sms => "sms",
///     Email => "email",
/// });
///
/// assert_eq!(Channel::Sms.as_str(), "sms");
/// assert_eq!("EMAIL".parse::<Channel>(), Ok(Channel::Email));
/// ```
#[macro_export]
macro_rules! impl_tag_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Canonical lowercase tag for this variant
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
