//! This module implements the character classes of the JSON6 lexical grammar.
//!
//! Identifiers follow the ECMAScript identifier productions expressed in
//! Unicode general categories: a start character is `$`, `_` or a letter
//! (Lu, Ll, Lt, Lm, Lo, Nl), and continuation characters additionally admit
//! marks, digits and connector punctuation (Mn, Mc, Nd, Pc).

use unicode_general_category::{get_general_category, GeneralCategory};

/// Extension trait querying membership of a character in the JSON6 lexical
/// character classes.
pub(super) trait UnicodeProperties: Sized + Copy {
    /// Returns `true` if this character can start an identifier.
    fn is_identifier_start(self) -> bool;

    /// Returns `true` if this character can continue an identifier.
    fn is_identifier_part(self) -> bool;

    /// Returns `true` if this character is JSON6 whitespace.
    fn is_json6_whitespace(self) -> bool;
}

impl UnicodeProperties for char {
    #[inline]
    fn is_identifier_start(self) -> bool {
        matches!(self, '$' | '_')
            || matches!(
                get_general_category(self),
                GeneralCategory::UppercaseLetter
                    | GeneralCategory::LowercaseLetter
                    | GeneralCategory::TitlecaseLetter
                    | GeneralCategory::ModifierLetter
                    | GeneralCategory::OtherLetter
                    | GeneralCategory::LetterNumber
            )
    }

    #[inline]
    fn is_identifier_part(self) -> bool {
        self.is_identifier_start()
            || matches!(
                get_general_category(self),
                GeneralCategory::NonspacingMark
                    | GeneralCategory::SpacingMark
                    | GeneralCategory::DecimalNumber
                    | GeneralCategory::ConnectorPunctuation
            )
    }

    #[inline]
    fn is_json6_whitespace(self) -> bool {
        // The explicit list covers the line terminators plus the whitespace
        // characters outside the Space_Separator category.
        matches!(
            self,
            '\u{0009}'
                | '\u{000A}'
                | '\u{000B}'
                | '\u{000C}'
                | '\u{000D}'
                | '\u{0020}'
                | '\u{00A0}'
                | '\u{2028}'
                | '\u{2029}'
                | '\u{FEFF}'
        ) || get_general_category(self) == GeneralCategory::SpaceSeparator
    }
}

/// Checks if a character is a line terminator.
#[inline]
pub(super) fn is_line_terminator(ch: char) -> bool {
    matches!(
        ch,
        '\u{000A}' /* <LF> */ | '\u{000D}' /* <CR> */ | '\u{2028}' /* <LS> */ | '\u{2029}' /* <PS> */
    )
}
