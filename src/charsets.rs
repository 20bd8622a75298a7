//! Predefined character sets for [`crate::generators::generate_string`].

/// Digits `0-9`.
pub const NUMERIC: &str = "0123456789";

/// Lowercase, uppercase and digits.
pub const ALPHANUMERIC: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Uppercase letters and digits without look-alikes.
///
/// Drops `0 1 2 5` and the letters confused with them (`O I Z S`). Meant for
/// codes a person has to read back or type.
pub const HUMAN_READABLE: &str = "ABCDEFGHJKLMNPQRTUVWXY346789";

/// Alphanumeric plus punctuation. The default charset.
pub const ALPHANUMERIC_SPECIAL: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789~!@#$%^&*()_-+={}[]\\|:;,./";

/// Lowercase hexadecimal digits.
pub const HEX_LOWER: &str = "0123456789abcdef";

pub const DEFAULT: &str = ALPHANUMERIC_SPECIAL;

pub const PRESETS: [(&str, &str); 5] = [
    ("numeric", NUMERIC),
    ("alphanumeric", ALPHANUMERIC),
    ("human-readable", HUMAN_READABLE),
    ("special", ALPHANUMERIC_SPECIAL),
    ("hex", HEX_LOWER),
];

pub fn preset(name: &str) -> Option<&'static str> {
    PRESETS
        .iter()
        .find(|(preset_name, _)| preset_name.eq_ignore_ascii_case(name))
        .map(|(_, chars)| *chars)
}
