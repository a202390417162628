// Shared enums and well-known affix flag names

/// Whether an affix rule attaches to the start or the end of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AffixKind {
    /// `PFX` rules: strip and add at the start of the word.
    Prefix,
    /// `SFX` rules: strip and add at the end of the word.
    Suffix,
}

impl AffixKind {
    /// Map an affix-file directive (`PFX` / `SFX`) to its kind.
    pub fn from_directive(directive: &str) -> Option<Self> {
        match directive {
            "PFX" => Some(Self::Prefix),
            "SFX" => Some(Self::Suffix),
            _ => None,
        }
    }

    /// The directive spelling of this kind.
    pub fn directive(self) -> &'static str {
        match self {
            Self::Prefix => "PFX",
            Self::Suffix => "SFX",
        }
    }
}

// ---------------------------------------------------------------------------
// Flag names
// ---------------------------------------------------------------------------

/// Forms carrying this code are accepted only in their written case.
pub const KEEPCASE: &str = "KEEPCASE";

/// Forms carrying this code are only valid inside compound words.
pub const ONLYINCOMPOUND: &str = "ONLYINCOMPOUND";

/// Bare words carrying this code are not words on their own.
pub const NEEDAFFIX: &str = "NEEDAFFIX";

/// Minimum length (in characters) of a word tested against compound rules.
pub const COMPOUNDMIN: &str = "COMPOUNDMIN";

/// Rule-code encoding mode (`long`, `num`, `UTF-8`).
pub const FLAG: &str = "FLAG";

/// Characters to try first when generating suggestions.
pub const TRY: &str = "TRY";

/// Extra characters that may appear inside words.
pub const WORDCHARS: &str = "WORDCHARS";
