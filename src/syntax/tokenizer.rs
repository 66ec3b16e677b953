//! Query tokenizer
//!
//! Splits query text into styled segments against a [`RuleTable`]. The
//! segments cover the input exactly: no gaps, no overlaps, original order.
//!
//! At each step the leftmost match across all rules is taken, with ties at
//! the same offset going to the rule declared first. Text between matches is
//! emitted unstyled. Each rule's next match is remembered and only searched
//! again once the cursor has moved past its start, so every rule scans the
//! text roughly once per call.

use std::iter::FusedIterator;
use std::ops::Range;

use super::dialect::RuleTable;
use super::rules::StyleRule;
use super::style::Style;
use super::tokens::Category;

/// A rule match within the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    /// Category of the rule that matched
    pub category: Category,
    /// Byte offset where the match starts (inclusive)
    pub start: usize,
    /// Byte offset where the match ends (exclusive)
    pub end: usize,
    /// Matched text, `input[start..end]`
    pub text: &'a str,
    /// How the matching rule styles its matches
    pub style_rule: StyleRule,
}

/// A contiguous run of the input and how to draw it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    /// The text of this run, exactly as it appears in the input
    pub text: &'a str,
    /// Byte range of this run in the input
    pub range: Range<usize>,
    /// Category of the match, `None` for text no rule matched
    pub category: Option<Category>,
    /// Style to draw with, `None` to inherit the base style
    pub style: Option<Style>,
}

impl Segment<'_> {
    /// True if this segment is drawn in the base style
    pub fn is_plain(&self) -> bool {
        self.style.is_none()
    }
}

/// Cached next match for one rule
#[derive(Debug, Clone, Copy)]
enum Slot {
    /// Not searched yet, or the cursor moved past the cached match
    Unknown,
    Found(usize, usize),
    /// The rule has no further matches in this text
    Exhausted,
}

/// Lazy iterator over the segments of a text
///
/// Cloning the iterator (or calling [`Segments::restart`]) starts the
/// sequence again; nothing carries over between runs.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    table: &'a RuleTable,
    text: &'a str,
    base: Style,
    cursor: usize,
    slots: Vec<Slot>,
    /// Match segment waiting behind an unstyled gap
    pending: Option<Segment<'a>>,
}

impl<'a> Segments<'a> {
    fn new(table: &'a RuleTable, text: &'a str, base: Style) -> Self {
        Self {
            table,
            text,
            base,
            cursor: 0,
            slots: vec![Slot::Unknown; table.rules().len()],
            pending: None,
        }
    }

    /// Rewind to the start of the text
    pub fn restart(&mut self) {
        self.cursor = 0;
        self.pending = None;
        self.slots.iter_mut().for_each(|slot| *slot = Slot::Unknown);
    }

    /// Earliest match at or after the cursor, first declared rule on ties
    fn next_match(&mut self) -> Option<Match<'a>> {
        let table = self.table;
        let mut best: Option<(usize, usize, usize)> = None;

        for (idx, rule) in table.rules().iter().enumerate() {
            let slot = &mut self.slots[idx];
            let stale = match *slot {
                Slot::Unknown => true,
                Slot::Found(start, _) => start < self.cursor,
                Slot::Exhausted => false,
            };
            if stale {
                *slot = match rule.find_at(self.text, self.cursor) {
                    Some((start, end)) => Slot::Found(start, end),
                    None => Slot::Exhausted,
                };
            }

            if let Slot::Found(start, end) = *slot {
                if best.map_or(true, |(best_start, _, _)| start < best_start) {
                    best = Some((start, end, idx));
                }
            }
        }

        best.map(|(start, end, idx)| {
            let rule = &table.rules()[idx];
            Match {
                category: rule.category,
                start,
                end,
                text: &self.text[start..end],
                style_rule: rule.style_rule,
            }
        })
    }

    fn plain(&self, range: Range<usize>) -> Segment<'a> {
        Segment {
            text: &self.text[range.clone()],
            range,
            category: None,
            style: None,
        }
    }

    fn styled(&self, m: &Match<'a>) -> Segment<'a> {
        let style = self.table.style_for(m, self.base);
        Segment {
            text: m.text,
            range: m.start..m.end,
            category: Some(m.category),
            style: (style != self.base).then_some(style),
        }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(segment) = self.pending.take() {
            return Some(segment);
        }
        if self.cursor >= self.text.len() {
            return None;
        }

        let gap_start = self.cursor;
        match self.next_match() {
            Some(m) => {
                let segment = self.styled(&m);
                self.cursor = m.end;
                if m.start > gap_start {
                    self.pending = Some(segment);
                    Some(self.plain(gap_start..m.start))
                } else {
                    Some(segment)
                }
            }
            None => {
                self.cursor = self.text.len();
                Some(self.plain(gap_start..self.text.len()))
            }
        }
    }
}

impl FusedIterator for Segments<'_> {}

/// Lazily tokenize `text`, resolving styles on top of `base`
pub fn segments<'a>(table: &'a RuleTable, text: &'a str, base: Style) -> Segments<'a> {
    Segments::new(table, text, base)
}

/// Tokenize `text` with the default base style
pub fn tokenize<'a>(table: &'a RuleTable, text: &'a str) -> Vec<Segment<'a>> {
    tokenize_with_base(table, text, Style::default())
}

/// Tokenize `text`, resolving styles on top of `base`
pub fn tokenize_with_base<'a>(table: &'a RuleTable, text: &'a str, base: Style) -> Vec<Segment<'a>> {
    segments(table, text, base).collect()
}
