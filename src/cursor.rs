/// Half-open byte range `[start, end)` into the text snapshot that was
/// searched. Always on `char` boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }
}

/// Which way [`MatchCursor::advance`] steps through the match ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Wraparound navigation over one search invocation's matches.
///
/// Holds its own copy of the span list, independent of the host's live
/// document. The spans index the snapshot that was searched, so the owner
/// must call [`invalidate`](Self::invalidate) when the text changes. Not
/// internally synchronized: mutate from a single owning thread only.
#[derive(Debug, Clone, Default)]
pub struct MatchCursor {
    spans: Vec<Span>,
    current: Option<usize>,
}

impl MatchCursor {
    pub fn new() -> Self {
        Self {
            spans: Vec::new(),
            current: None,
        }
    }

    /// Replaces the stored matches; the first one becomes current.
    pub fn reset(&mut self, spans: Vec<Span>) {
        self.current = if spans.is_empty() { None } else { Some(0) };
        self.spans = spans;
    }

    /// Drops all matches and the current index.
    pub fn invalidate(&mut self) {
        self.spans.clear();
        self.current = None;
    }

    /// The span at the current index, if any.
    pub fn current(&self) -> Option<Span> {
        self.current.and_then(|i| self.spans.get(i)).copied()
    }

    /// Steps to the neighboring match, wrapping at either end, and returns
    /// the span now current. With no matches stored this is a no-op
    /// returning `None`.
    pub fn advance(&mut self, direction: Direction) -> Option<Span> {
        let len = self.spans.len();
        if len == 0 {
            return None;
        }
        let index = match (direction, self.current) {
            (Direction::Next, Some(i)) => (i + 1) % len,
            (Direction::Next, None) => 0,
            (Direction::Previous, Some(i)) if i > 0 => i - 1,
            (Direction::Previous, _) => len - 1,
        };
        self.current = Some(index);
        self.spans.get(index).copied()
    }

    pub fn next(&mut self) -> Option<Span> {
        self.advance(Direction::Next)
    }

    pub fn previous(&mut self) -> Option<Span> {
        self.advance(Direction::Previous)
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// All stored spans, for host-side match painting.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// 1-based `(current, total)` for a status display.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.current.map(|i| (i + 1, self.spans.len()))
    }

    /// The stored match containing `offset`, if any.
    pub fn match_at(&self, offset: usize) -> Option<Span> {
        self.spans.iter().copied().find(|s| s.contains(offset))
    }
}
