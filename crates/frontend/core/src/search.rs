//! Case-insensitive substring search over consumable catalogs.
//!
//! The engine only matches and orders; highlighting and truncation are
//! presentation concerns. Results are deterministic for identical inputs.

use craft_core::ConsumableVariant;

/// Byte offsets `[start, end)` of the first match within a variant name.
///
/// ASCII case folding preserves byte offsets, so the span indexes the
/// original name directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

impl MatchSpan {
    /// Zero-width span used for empty queries.
    pub const fn empty() -> Self {
        Self { start: 0, end: 0 }
    }
}

/// One search result: the matching variant plus its highlight span.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchHit<'a> {
    pub variant: &'a ConsumableVariant,
    pub span: MatchSpan,
}

/// Filters `catalog` down to the variants whose name contains `query` as a
/// contiguous substring under ASCII case folding.
///
/// An empty query matches the whole catalog in declaration order. Matches
/// are ordered by first-match start, then name length, then case-folded
/// name; the full filtered set is returned without a result cap.
pub fn search<'a>(catalog: &'a [ConsumableVariant], query: &str) -> Vec<SearchHit<'a>> {
    if query.is_empty() {
        return catalog
            .iter()
            .map(|variant| SearchHit {
                variant,
                span: MatchSpan::empty(),
            })
            .collect();
    }

    let needle = query.to_ascii_lowercase();

    // Keep the folded name alongside each hit so ordering does not refold
    // on every comparison.
    let mut matches: Vec<(SearchHit<'a>, String)> = Vec::new();
    for variant in catalog {
        let folded = variant.name.to_ascii_lowercase();
        if let Some(start) = folded.find(&needle) {
            matches.push((
                SearchHit {
                    variant,
                    span: MatchSpan {
                        start,
                        end: start + needle.len(),
                    },
                },
                folded,
            ));
        }
    }

    matches.sort_by(|(a, folded_a), (b, folded_b)| {
        a.span
            .start
            .cmp(&b.span.start)
            .then(folded_a.len().cmp(&folded_b.len()))
            .then_with(|| folded_a.cmp(folded_b))
    });

    matches.into_iter().map(|(hit, _)| hit).collect()
}
