//! ANSI colour + bold wrappers for the CLI output layer.  No external deps.

use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorError {
    InvalidHexDigit,
    InvalidHexLength,
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::InvalidHexDigit => f.write_str("invalid hex colour digit"),
            ColorError::InvalidHexLength => f.write_str("hex colour must be exactly 6 digits"),
        }
    }
}
impl Error for ColorError {}

/// An SGR escape sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnsiCode {
    Static(&'static str),
    Rgb(String),
}

/// Named foreground colours, in the order `colors` lists them.
pub const NAMED: [(&str, &str); 9] = [
    ("black", "\x1b[30m"),
    ("red", "\x1b[31m"),
    ("green", "\x1b[32m"),
    ("yellow", "\x1b[33m"),
    ("blue", "\x1b[34m"),
    ("magenta", "\x1b[35m"),
    ("cyan", "\x1b[36m"),
    ("white", "\x1b[37m"),
    ("orange", "\x1b[38;2;210;135;10m"),
];

impl AnsiCode {
    pub const fn bold() -> Self {
        Self::Static("\x1b[1m")
    }
    pub const fn reset() -> Self {
        Self::Static("\x1b[0m")
    }
    /// Terminal default foreground; `paint` leaves text untouched with it.
    pub const fn plain() -> Self {
        Self::Static("")
    }

    /// True-colour escape `ESC[38;2;R;G;Bm`.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(format!("\x1b[38;2;{r};{g};{b}m"))
    }

    /// Parse `plain`/`none`, a colour name or `#rrggbb`.
    pub fn from_name(s: &str) -> Result<Self, ColorError> {
        let name = s.trim().to_ascii_lowercase();
        if matches!(name.as_str(), "plain" | "none" | "") {
            return Ok(Self::plain());
        }
        NAMED
            .iter()
            .find(|(n, _)| *n == name)
            .map_or_else(|| Self::from_hex(&name), |(_, seq)| Ok(Self::Static(seq)))
    }

    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let h = hex.trim().trim_start_matches('#');
        if h.len() != 6 || !h.is_ascii() {
            return Err(ColorError::InvalidHexLength);
        }
        let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| ColorError::InvalidHexDigit);
        Ok(Self::rgb(byte(&h[..2])?, byte(&h[2..4])?, byte(&h[4..])?))
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Rgb(s) => s,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.as_str().is_empty()
    }
}

impl std::str::FromStr for AnsiCode {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for AnsiCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wrap `text` in colour + reset sequence.
#[inline]
#[must_use]
pub fn colorize(c: &AnsiCode, text: &str) -> String {
    if c.is_plain() {
        return text.to_owned();
    }
    format!("{c}{text}{}", AnsiCode::reset())
}
