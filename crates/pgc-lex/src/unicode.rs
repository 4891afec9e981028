//! Character classes used by the scanner.
//!
//! ASCII is checked first on every path; the Unicode General_Category
//! tables are only consulted for non-ASCII code points.

use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};

/// Checks if a character can start (or continue) an identifier.
///
/// Letters are ASCII letters, the underscore, and any code point whose
/// general category is a letter (`Lu`, `Ll`, `Lt`, `Lm`, `Lo`). Letter
/// numbers such as `Ⅻ` and combining marks are not letters.
///
/// # Example
///
/// ```
/// use pgc_lex::unicode::is_letter;
///
/// assert!(is_letter('a'));
/// assert!(is_letter('_'));
/// assert!(is_letter('α'));
/// assert!(!is_letter('1'));
/// assert!(!is_letter('+'));
/// ```
#[inline]
pub fn is_letter(c: char) -> bool {
    if c.is_ascii() {
        c.is_ascii_alphabetic() || c == '_'
    } else {
        c.general_category_group() == GeneralCategoryGroup::Letter
    }
}

/// Checks if a character is an ASCII decimal digit (`0`-`9`).
///
/// Only these start a number literal.
#[inline]
pub fn is_decimal(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character is a digit inside an identifier.
///
/// Digits are decimal digits of any script (general category `Nd`), so
/// `x٣` is a single identifier. Fractions, superscripts and other numeric
/// symbols are not digits.
///
/// # Example
///
/// ```
/// use pgc_lex::unicode::is_digit;
///
/// assert!(is_digit('7'));
/// assert!(is_digit('٣')); // Arabic-Indic three
/// assert!(!is_digit('a'));
/// assert!(!is_digit('½'));
/// ```
#[inline]
pub fn is_digit(c: char) -> bool {
    if c.is_ascii() {
        c.is_ascii_digit()
    } else {
        c.general_category() == GeneralCategory::DecimalNumber
    }
}

/// Checks if a character is insignificant whitespace.
///
/// Only space, tab, newline and carriage return are skipped.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Returns the numeric value of `c` as a digit in any radix up to 36.
///
/// `0`-`9` map to 0-9 and ASCII letters (either case) to 10-35. Anything
/// else has no value.
///
/// # Example
///
/// ```
/// use pgc_lex::unicode::digit_value;
///
/// assert_eq!(digit_value('7'), Some(7));
/// assert_eq!(digit_value('f'), Some(15));
/// assert_eq!(digit_value('Z'), Some(35));
/// assert_eq!(digit_value('.'), None);
/// ```
#[inline]
pub fn digit_value(c: char) -> Option<u32> {
    c.to_digit(36)
}
