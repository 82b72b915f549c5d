//! Color values accepted by `<color=...>`.
//!
//! Supports the fixed list of named colors and `#` followed by one to eight
//! hexadecimal digits.

use std::fmt;

use crate::error::ColorParseError;

/// A color name from the fixed palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Aqua,
    Black,
    Blue,
    Brown,
    Cyan,
    DarkBlue,
    Fuchsia,
    Green,
    Grey,
    LightBlue,
    Lime,
    Magenta,
    Maroon,
    Navy,
    Olive,
    Orange,
    Purple,
    Red,
    Silver,
    Teal,
    White,
    Yellow,
}

impl NamedColor {
    /// Every named color, alphabetically.
    pub const ALL: [NamedColor; 22] = [
        NamedColor::Aqua,
        NamedColor::Black,
        NamedColor::Blue,
        NamedColor::Brown,
        NamedColor::Cyan,
        NamedColor::DarkBlue,
        NamedColor::Fuchsia,
        NamedColor::Green,
        NamedColor::Grey,
        NamedColor::LightBlue,
        NamedColor::Lime,
        NamedColor::Magenta,
        NamedColor::Maroon,
        NamedColor::Navy,
        NamedColor::Olive,
        NamedColor::Orange,
        NamedColor::Purple,
        NamedColor::Red,
        NamedColor::Silver,
        NamedColor::Teal,
        NamedColor::White,
        NamedColor::Yellow,
    ];

    /// Look up a lower-case color name.
    pub fn from_name(name: &str) -> Option<Self> {
        let color = match name {
            "aqua" => NamedColor::Aqua,
            "black" => NamedColor::Black,
            "blue" => NamedColor::Blue,
            "brown" => NamedColor::Brown,
            "cyan" => NamedColor::Cyan,
            "darkblue" => NamedColor::DarkBlue,
            "fuchsia" => NamedColor::Fuchsia,
            "green" => NamedColor::Green,
            "grey" => NamedColor::Grey,
            "lightblue" => NamedColor::LightBlue,
            "lime" => NamedColor::Lime,
            "magenta" => NamedColor::Magenta,
            "maroon" => NamedColor::Maroon,
            "navy" => NamedColor::Navy,
            "olive" => NamedColor::Olive,
            "orange" => NamedColor::Orange,
            "purple" => NamedColor::Purple,
            "red" => NamedColor::Red,
            "silver" => NamedColor::Silver,
            "teal" => NamedColor::Teal,
            "white" => NamedColor::White,
            "yellow" => NamedColor::Yellow,
            _ => return None,
        };
        Some(color)
    }

    /// The CSS name of the color.
    pub fn as_str(self) -> &'static str {
        match self {
            NamedColor::Aqua => "aqua",
            NamedColor::Black => "black",
            NamedColor::Blue => "blue",
            NamedColor::Brown => "brown",
            NamedColor::Cyan => "cyan",
            NamedColor::DarkBlue => "darkblue",
            NamedColor::Fuchsia => "fuchsia",
            NamedColor::Green => "green",
            NamedColor::Grey => "grey",
            NamedColor::LightBlue => "lightblue",
            NamedColor::Lime => "lime",
            NamedColor::Magenta => "magenta",
            NamedColor::Maroon => "maroon",
            NamedColor::Navy => "navy",
            NamedColor::Olive => "olive",
            NamedColor::Orange => "orange",
            NamedColor::Purple => "purple",
            NamedColor::Red => "red",
            NamedColor::Silver => "silver",
            NamedColor::Teal => "teal",
            NamedColor::White => "white",
            NamedColor::Yellow => "yellow",
        }
    }
}

/// A resolved color value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// Named color from the palette.
    Named(NamedColor),
    /// Hex digits as written, without the leading `#`.
    Hex(String),
}

impl Color {
    /// What an unrecognised color value renders as.
    pub const FALLBACK: Color = Color::Named(NamedColor::White);

    /// Parse a color value (the text between `=` and `>`).
    ///
    /// Names are matched case-insensitively. Hex values keep their case.
    ///
    /// # Examples
    ///
    /// ```
    /// use markup::{Color, NamedColor};
    ///
    /// assert_eq!(Color::parse("Red").unwrap(), Color::Named(NamedColor::Red));
    /// assert_eq!(Color::parse("#fA0").unwrap(), Color::Hex("fA0".into()));
    /// assert!(Color::parse("#").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        match input.strip_prefix('#') {
            Some(digits) => Self::parse_hex(digits),
            None => Self::parse_named(input),
        }
    }

    /// Parse a color value, falling back to [`Color::FALLBACK`] when invalid.
    pub fn parse_or_fallback(input: &str) -> Self {
        Self::parse(input).unwrap_or_else(|err| {
            log::trace!("{err}, using {}", Self::FALLBACK);
            Self::FALLBACK
        })
    }

    /// Parse hex digits (without the `#` prefix).
    fn parse_hex(digits: &str) -> Result<Self, ColorParseError> {
        let valid = (1..=8).contains(&digits.len())
            && digits.bytes().all(|b| b.is_ascii_hexdigit());
        if valid {
            Ok(Color::Hex(digits.to_string()))
        } else {
            Err(ColorParseError::InvalidHex(format!("#{digits}")))
        }
    }

    /// Parse a named color.
    fn parse_named(name: &str) -> Result<Self, ColorParseError> {
        NamedColor::from_name(&name.to_lowercase())
            .map(Color::Named)
            .ok_or_else(|| ColorParseError::UnknownName(name.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(name) => f.write_str(name.as_str()),
            Color::Hex(digits) => write!(f, "#{digits}"),
        }
    }
}
