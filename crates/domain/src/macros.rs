//! Macro for implementing Display and FromStr for domain enums
//!
//! Every closed value set in the domain (correspondence confidentiality,
//! task status, notification kind, ...) has a stable wire name.
//! This macro keeps `Display` and `FromStr` in lockstep with that name.
//!
//! # Example
//!
//! ```rust
//! use diwan_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum ArchiveState {
//!     Open,
//!     Sealed,
//! }
//!
//! impl_domain_status_conversions!(ArchiveState {
//!     Open => "open",
//!     Sealed => "sealed",
//! });
//!
//! assert_eq!(ArchiveState::Sealed.to_string(), "sealed");
//! assert_eq!("OPEN".parse::<ArchiveState>(), Ok(ArchiveState::Open));
//! ```

/// Implements Display and FromStr traits for domain enums
///
/// - Display writes the mapped string verbatim
/// - FromStr matches case-insensitively and reports the enum name on failure
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = s.trim();
                $(if value.eq_ignore_ascii_case($str) {
                    return Ok(Self::$variant);
                })+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }
    };
}
