//! Terminal host using crossterm
//!
//! Draws highlighted segments with ANSI styling, and wraps raw mode for the
//! interactive query line.

use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyEvent, KeyEventKind},
    queue,
    style::{self, Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::error::Result;
use crate::syntax::{Color, Segment, Style};

/// Map a palette color to a crossterm color (`None` for the default)
fn to_crossterm(color: Color) -> Option<style::Color> {
    let c = match color {
        Color::Default => return None,
        Color::Black => style::Color::Black,
        Color::Red => style::Color::DarkRed,
        Color::Green => style::Color::DarkGreen,
        Color::Yellow => style::Color::DarkYellow,
        Color::Blue => style::Color::DarkBlue,
        Color::Magenta => style::Color::DarkMagenta,
        Color::Cyan => style::Color::DarkCyan,
        Color::White => style::Color::Grey,
        Color::BrightBlack => style::Color::DarkGrey,
        Color::BrightRed => style::Color::Red,
        Color::BrightGreen => style::Color::Green,
        Color::BrightYellow => style::Color::Yellow,
        Color::BrightBlue => style::Color::Blue,
        Color::BrightMagenta => style::Color::Magenta,
        Color::BrightCyan => style::Color::Cyan,
        Color::BrightWhite => style::Color::White,
    };
    Some(c)
}

/// Queue the attributes of `style`
fn queue_style<W: Write>(out: &mut W, style: Style) -> Result<()> {
    if let Some(fg) = to_crossterm(style.fg) {
        queue!(out, SetForegroundColor(fg))?;
    }
    if let Some(bg) = to_crossterm(style.bg) {
        queue!(out, SetBackgroundColor(bg))?;
    }
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.italic {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    if style.underline {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    Ok(())
}

/// Write segments to `out`, styled when `color` is set
///
/// Plain segments are written as-is; styled ones are wrapped in their
/// attributes and a reset.
pub fn write_segments<W: Write>(out: &mut W, segments: &[Segment<'_>], color: bool) -> Result<()> {
    for segment in segments {
        match segment.style {
            Some(style) if color => {
                queue_style(out, style)?;
                queue!(out, Print(segment.text), SetAttribute(Attribute::Reset))?;
            }
            _ => queue!(out, Print(segment.text))?,
        }
    }
    Ok(())
}

/// Clip segments to the display columns `skip..skip + width`.
///
/// Returns the blank columns to draw before the first visible segment (a
/// wide character cut by `skip` is replaced by blanks) and the clipped
/// segments.
pub fn visible_segments<'a>(
    segments: &[Segment<'a>],
    skip: usize,
    width: usize,
) -> (usize, Vec<Segment<'a>>) {
    let end_col = skip + width;
    let mut visible = Vec::new();
    let mut first_col = None;
    let mut col = 0;

    for segment in segments {
        let mut start = None;
        let mut end = segment.text.len();
        let mut full = false;

        for (idx, ch) in segment.text.char_indices() {
            let w = UnicodeWidthChar::width(ch).unwrap_or(0);
            if col + w > end_col {
                end = idx;
                full = true;
                break;
            }
            if col >= skip && start.is_none() {
                start = Some(idx);
                first_col.get_or_insert(col);
            }
            col += w;
        }

        if let Some(start) = start.filter(|&s| s < end) {
            visible.push(Segment {
                text: &segment.text[start..end],
                range: segment.range.start + start..segment.range.start + end,
                category: segment.category,
                style: segment.style,
            });
        }
        if full {
            break;
        }
    }

    let pad = first_col.map_or(0, |c| c - skip);
    (pad, visible)
}

/// Raw-mode terminal for the interactive query line
pub struct Terminal {
    /// Terminal width in columns
    cols: u16,
}

impl Terminal {
    /// Create a new terminal instance and enter raw mode
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode()?;
        let (cols, _) = terminal::size()?;
        Ok(Self { cols })
    }

    /// Redraw the current line: prompt, highlighted text, then the cursor.
    ///
    /// Text wider than the terminal scrolls horizontally so the cursor
    /// stays on screen.
    pub fn redraw_line(
        &mut self,
        prompt: &str,
        segments: &[Segment<'_>],
        cursor_col: usize,
        color: bool,
    ) -> Result<()> {
        let prompt_width = prompt.width();
        let avail = (self.cols as usize).saturating_sub(prompt_width + 1).max(1);
        let skip = (cursor_col + 1).saturating_sub(avail);
        let (pad, visible) = visible_segments(segments, skip, avail);

        let mut out = io::stdout();
        queue!(
            out,
            cursor::MoveToColumn(0),
            terminal::Clear(ClearType::CurrentLine),
            Print(prompt),
            Print(" ".repeat(pad))
        )?;
        write_segments(&mut out, &visible, color)?;

        let col = (prompt_width + cursor_col - skip).min(u16::MAX as usize) as u16;
        queue!(out, cursor::MoveToColumn(col))?;
        out.flush()?;
        Ok(())
    }

    /// Move to the start of a fresh line
    pub fn newline(&mut self) -> Result<()> {
        let mut out = io::stdout();
        queue!(out, Print("\r\n"))?;
        out.flush()?;
        Ok(())
    }

    /// Read a key press (blocking)
    pub fn read_key(&mut self) -> Result<KeyEvent> {
        loop {
            match event::read()? {
                Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
                    return Ok(key_event)
                }
                Event::Resize(cols, _) => {
                    self.cols = cols;
                }
                _ => {
                    // Ignore other events (mouse, focus, etc.)
                }
            }
        }
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        // Restore terminal state
        let _ = terminal::disable_raw_mode();
    }
}
