//! Closed protocol vocabularies
//!
//! Every option the manager accepts from a fixed set of values (sort order,
//! feed type, ticket status, ...) is modelled as a [`Vocabulary`]: an enum whose
//! variants carry an upper-case name and the literal wire string that goes into
//! the request XML.
//!
//! Conversion from free-form input is the same for every vocabulary:
//!
//! 1. `None` or `""` means "no value requested" and yields `Ok(None)`
//! 2. exact-match aliases are consulted first (see [`Vocabulary::ALIASES`])
//! 3. the input is upper-cased and matched against the variant *names*
//! 4. anything else is [`GmpError::InvalidArgument`]
//!
//! Dialects that need a different variant set declare their own enum with
//! [`vocabulary!`](crate::vocabulary) and get the same normalizer for free.
//!
//! ```rust
//! use gmp_core::{vocabulary, Vocabulary};
//!
//! vocabulary! {
//!     /// Direction of a sort
//!     pub enum Direction {
//!         argument = "direction",
//!         function = "get_direction_from_string",
//!         Up("UP") => "up",
//!         Down("DOWN") => "down",
//!     }
//! }
//!
//! assert_eq!(Direction::from_string(Some("Up")).unwrap(), Some(Direction::Up));
//! assert_eq!(Direction::from_string(None).unwrap(), None);
//! assert!(Direction::from_string(Some("sideways")).is_err());
//! ```

use crate::error::{GmpError, Result};

/// A closed set of protocol values
pub trait Vocabulary: Copy + Eq + std::fmt::Debug + Send + Sync + 'static {
    /// Argument name reported when a conversion fails
    const ARGUMENT: &'static str;

    /// Conversion function name reported when a conversion fails
    const FUNCTION: &'static str;

    /// All variants in declaration order
    const VARIANTS: &'static [Self];

    /// Wire tokens mapping to a variant whose name differs from the token.
    /// Matched exactly, before the name lookup.
    const ALIASES: &'static [(&'static str, Self)] = &[];

    /// Declared upper-case name of the variant (e.g. `GVMD_DATA`)
    fn name(&self) -> &'static str;

    /// Wire string of the variant, reproduced verbatim in requests
    fn value(&self) -> &'static str;

    /// Convert an optional string into a variant
    ///
    /// # Returns
    /// - `Ok(None)` for `None` and `""`
    /// - `Ok(Some(variant))` for a matching alias or a case-insensitive name match
    /// - `Err(GmpError::InvalidArgument)` otherwise
    fn from_string(value: Option<&str>) -> Result<Option<Self>> {
        normalize(value)
    }

    /// Look up a variant by its exact wire string
    ///
    /// Case-sensitive and alias-free: only the strings [`Vocabulary::value`]
    /// produces are accepted.
    fn from_value(value: &str) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.value() == value)
    }
}

/// Table-driven conversion shared by all vocabularies
pub fn normalize<V: Vocabulary>(value: Option<&str>) -> Result<Option<V>> {
    let value = match value {
        Some(value) if !value.is_empty() => value,
        _ => return Ok(None),
    };

    if let Some(&(_, variant)) = V::ALIASES.iter().find(|(alias, _)| *alias == value) {
        return Ok(Some(variant));
    }

    let name = value.to_uppercase();
    match V::VARIANTS.iter().find(|variant| variant.name() == name) {
        Some(variant) => Ok(Some(*variant)),
        None => {
            tracing::trace!(argument = V::ARGUMENT, value, "rejected vocabulary value");
            Err(GmpError::invalid_argument(V::ARGUMENT, V::FUNCTION))
        }
    }
}

/// Declare a vocabulary enum from its variant table
///
/// Each row is `Variant("NAME") => "wire"`. An optional trailing
/// `aliases { "token" => Variant, ... }` block fills [`Vocabulary::ALIASES`].
/// The generated type implements [`Vocabulary`], `Display` (wire string) and
/// `serde::Serialize` (wire string).
#[macro_export]
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $vis:vis enum $ty:ident {
            argument = $argument:literal,
            function = $function:literal,
            $( $(#[$vmeta:meta])* $variant:ident ( $name:literal ) => $value:literal ),+ $(,)?
        }
        $( aliases { $( $alias:literal => $target:ident ),* $(,)? } )?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $ty {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $crate::Vocabulary for $ty {
            const ARGUMENT: &'static str = $argument;
            const FUNCTION: &'static str = $function;
            const VARIANTS: &'static [Self] = &[ $( $ty::$variant, )+ ];
            $( const ALIASES: &'static [(&'static str, Self)] = &[ $( ($alias, $ty::$target), )* ]; )?

            fn name(&self) -> &'static str {
                match self {
                    $( $ty::$variant => $name, )+
                }
            }

            fn value(&self) -> &'static str {
                match self {
                    $( $ty::$variant => $value, )+
                }
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::Vocabulary::value(self))
            }
        }

        impl $crate::serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::serde::Serializer,
            {
                serializer.serialize_str($crate::Vocabulary::value(self))
            }
        }
    };
}
