//! Regex-driven lexical highlighting.
//!
//! The source is classified by a fixed sequence of passes over the raw text.
//! Literal passes (comments, strings) are resolved together, left to right:
//! the construct whose opening delimiter comes first claims its whole match,
//! and on a tie the earlier pass wins. Token passes (numbers, variables,
//! keywords, constants) then run in order and only claim a match whose bytes
//! are all still plain text, so a keyword never shows up inside a string, a
//! comment or a `$variable` name.

use std::{ops::Range, sync::LazyLock};

use regex::{Match, Regex};
use serde::Serialize;
use tracing::warn;

pub mod php;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenCategory {
    Keyword,
    Constant,
    StringLiteral,
    Comment,
    Number,
    Variable,
    PlainText,
}

/// A half-open byte range of the source tagged with one category.
///
/// `start` and `end` always fall on char boundaries of the text the span was
/// computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HighlightSpan {
    pub start: usize,
    pub end: usize,
    pub category: TokenCategory,
}

impl HighlightSpan {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Slice of `source` covered by this span.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.range()).unwrap_or("")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PassKind {
    Literal,
    Token,
}

#[derive(Debug)]
pub(crate) struct Pass {
    kind: PassKind,
    category: TokenCategory,
    regex: Option<Regex>,
}

impl Pass {
    pub(crate) fn new(kind: PassKind, category: TokenCategory, pattern: String) -> Self {
        let regex = match Regex::new(&pattern) {
            Ok(re) => Some(re),
            Err(err) => {
                warn!(?category, error = %err, "highlight pattern skipped");
                None
            }
        };
        Self { kind, category, regex }
    }

    fn find_at<'h>(&self, source: &'h str, start: usize) -> Option<Match<'h>> {
        self.regex.as_ref()?.find_at(source, start)
    }

    fn apply_token(&self, source: &str, categories: &mut [TokenCategory]) {
        let Some(re) = &self.regex else { return };
        for m in re.find_iter(source) {
            let slot = &mut categories[m.range()];
            if slot.iter().all(|c| *c == TokenCategory::PlainText) {
                slot.fill(self.category);
            }
        }
    }
}

/// Leftmost-first resolution of comments and strings.
fn apply_literals(source: &str, passes: &[&Pass], categories: &mut [TokenCategory]) {
    let mut next: Vec<Option<Match>> = passes.iter().map(|p| p.find_at(source, 0)).collect();
    let mut pos = 0;
    loop {
        for (pass, slot) in passes.iter().zip(next.iter_mut()) {
            if matches!(slot, Some(m) if m.start() < pos) {
                *slot = pass.find_at(source, pos);
            }
        }
        let Some((i, m)) = next
            .iter()
            .enumerate()
            .filter_map(|(i, m)| (*m).map(|m| (i, m)))
            .min_by_key(|(i, m)| (m.start(), *i))
        else {
            break;
        };
        categories[m.range()].fill(passes[i].category);
        pos = m.end();
    }
}

static PASSES: LazyLock<Vec<Pass>> = LazyLock::new(php::passes);

/// Classify `source` into contiguous, non-overlapping spans covering all of it.
///
/// Adjacent bytes with the same category are merged, so plain text between
/// tokens comes back as one `PlainText` span. Empty input gives no spans.
pub fn highlight(source: &str) -> Vec<HighlightSpan> {
    if source.is_empty() {
        return Vec::new();
    }

    let mut categories = vec![TokenCategory::PlainText; source.len()];
    let (literals, tokens): (Vec<&Pass>, Vec<&Pass>) =
        PASSES.iter().partition(|p| p.kind == PassKind::Literal);
    apply_literals(source, &literals, &mut categories);
    for pass in tokens {
        pass.apply_token(source, &mut categories);
    }

    let mut spans = Vec::new();
    let mut start = 0;
    for i in 1..=categories.len() {
        if i == categories.len() || categories[i] != categories[start] {
            spans.push(HighlightSpan {
                start,
                end: i,
                category: categories[start],
            });
            start = i;
        }
    }
    spans
}
