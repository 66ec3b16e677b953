//! Style types for highlighted query text
//!
//! A `Style` is what the host draws a segment with. The tokenizer only
//! decides which style goes where; the palette decides what the styles are.

use crate::error::{HighlightError, Result};

/// Terminal colors (ANSI 16-color palette for compatibility)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    /// Parse a color name such as `green` or `bright-blue`
    pub fn from_name(name: &str) -> Option<Self> {
        let color = match name.to_ascii_lowercase().replace('_', "-").as_str() {
            "default" => Color::Default,
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" => Color::White,
            "bright-black" | "gray" | "grey" => Color::BrightBlack,
            "bright-red" => Color::BrightRed,
            "bright-green" => Color::BrightGreen,
            "bright-yellow" => Color::BrightYellow,
            "bright-blue" => Color::BrightBlue,
            "bright-magenta" => Color::BrightMagenta,
            "bright-cyan" => Color::BrightCyan,
            "bright-white" => Color::BrightWhite,
            _ => return None,
        };
        Some(color)
    }
}

/// Text style attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    /// Foreground color
    pub fg: Color,
    /// Background color
    pub bg: Color,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
    /// Underlined text
    pub underline: bool,
}

impl Style {
    /// Create a style with just foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Default::default()
        }
    }

    /// Builder: set background color
    pub fn with_bg(mut self, color: Color) -> Self {
        self.bg = color;
        self
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set italic
    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Builder: set underline
    pub fn with_underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Check if this is the default (no styling)
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Layer `over` on top of this style.
    ///
    /// Colors in `over` replace ours unless they are `Color::Default`;
    /// attributes are additive.
    pub fn patch(self, over: Style) -> Style {
        Style {
            fg: if over.fg == Color::Default { self.fg } else { over.fg },
            bg: if over.bg == Color::Default { self.bg } else { over.bg },
            bold: self.bold || over.bold,
            italic: self.italic || over.italic,
            underline: self.underline || over.underline,
        }
    }

    /// Parse a style description like `"bright-blue on black bold italic"`.
    ///
    /// The first bare color is the foreground, a color after `on` is the
    /// background. An empty string is the default style.
    pub fn parse(text: &str) -> Result<Self> {
        let mut style = Style::default();
        let mut words = text.split_whitespace();
        let mut seen_fg = false;

        while let Some(word) = words.next() {
            match word.to_ascii_lowercase().as_str() {
                "bold" => style.bold = true,
                "italic" => style.italic = true,
                "underline" => style.underline = true,
                "on" => {
                    let bg = words
                        .next()
                        .and_then(Color::from_name)
                        .ok_or_else(|| HighlightError::InvalidStyle(text.to_string()))?;
                    style.bg = bg;
                }
                other => match Color::from_name(other) {
                    Some(fg) if !seen_fg => {
                        style.fg = fg;
                        seen_fg = true;
                    }
                    _ => return Err(HighlightError::InvalidStyle(text.to_string())),
                },
            }
        }

        Ok(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_default() {
        let style = Style::default();
        assert!(style.is_default());
        assert_eq!(style.fg, Color::Default);
        assert_eq!(style.bg, Color::Default);
        assert!(!style.bold);
    }

    #[test]
    fn test_style_builders() {
        let style = Style::fg(Color::Red).with_bold().with_bg(Color::Blue);
        assert_eq!(style.fg, Color::Red);
        assert_eq!(style.bg, Color::Blue);
        assert!(style.bold);
        assert!(!style.is_default());
    }

    #[test]
    fn test_patch_keeps_base_colors() {
        let base = Style::fg(Color::White).with_bg(Color::Black);
        let patched = base.patch(Style::default().with_bold());
        assert_eq!(patched.fg, Color::White);
        assert_eq!(patched.bg, Color::Black);
        assert!(patched.bold);

        let patched = base.patch(Style::fg(Color::Green));
        assert_eq!(patched.fg, Color::Green);
        assert_eq!(patched.bg, Color::Black);
    }

    #[test]
    fn test_parse_style() {
        let style = Style::parse("bright-blue on black bold italic").unwrap();
        assert_eq!(style.fg, Color::BrightBlue);
        assert_eq!(style.bg, Color::Black);
        assert!(style.bold);
        assert!(style.italic);
        assert!(!style.underline);

        assert_eq!(Style::parse("").unwrap(), Style::default());
        assert_eq!(Style::parse("Green").unwrap(), Style::fg(Color::Green));
    }

    #[test]
    fn test_parse_style_invalid() {
        assert!(Style::parse("mauve").is_err());
        assert!(Style::parse("red blue").is_err());
        assert!(Style::parse("red on").is_err());
    }
}
