// typo-core: shared types for the Typo affix spell checker.
//
// Leaf crate used by the affix parser, the dictionary builder and the
// speller: capitalization variants, rule-code tokenization and the
// well-known affix flag names.

pub mod case;
pub mod enums;
pub mod flag;

pub use enums::AffixKind;
pub use flag::{FlagMode, parse_rule_codes};
