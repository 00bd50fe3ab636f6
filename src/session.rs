use std::thread;

use flume::{Receiver, TryRecvError, bounded};
use log::{debug, warn};

use crate::cursor::{Direction, MatchCursor, Span};
use crate::finder::{PatternError, SearchMode, find};

/// Outcome of a completed search, for the host's status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStatus {
    /// Matches found; the cursor now sits on the first one.
    Found { total: usize },
    /// The pattern compiled (or was empty) but matched nothing.
    NoMatches,
    /// The pattern did not compile; prior matches are left untouched.
    Failed(PatternError),
    /// The result belonged to a superseded submission and was discarded.
    Superseded,
}

type FindResult = Result<Vec<Span>, PatternError>;

struct PendingSearch {
    generation: u64,
    rx: Receiver<FindResult>,
}

/// Owns the match cursor and the search lifecycle for one text surface.
///
/// The session itself is single-owner state: every method here must be
/// called from the owning (event) thread. Only the worker spawned by
/// [`submit`](Self::submit) runs elsewhere, and it communicates solely
/// through its one-shot completion channel.
///
/// A search runs to completion or failure; there is no mid-search
/// cancellation. Retriggering instead supersedes: the newest submission
/// wins, and a stale result is discarded when it eventually arrives.
pub struct SearchSession {
    mode: SearchMode,
    cursor: MatchCursor,
    error: Option<PatternError>,
    generation: u64,
    pending: Option<PendingSearch>,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSession {
    pub fn new() -> Self {
        Self {
            mode: SearchMode::default(),
            cursor: MatchCursor::new(),
            error: None,
            generation: 0,
            pending: None,
        }
    }

    /// Starts a search over snapshots of `text` and `pattern`, off the
    /// calling thread. Any in-flight search is superseded: its receiver is
    /// dropped here, and the generation stamp keeps an already-queued stale
    /// result from being applied later.
    pub fn submit(&mut self, text: &str, pattern: &str) {
        self.generation += 1;
        let generation = self.generation;
        let (tx, rx) = bounded(1);
        let text = text.to_string();
        let pattern = pattern.to_string();
        let mode = self.mode;
        debug!("search {} submitted ({:?}, {} bytes)", generation, mode, text.len());
        thread::spawn(move || {
            let _ = tx.send(find(&text, &pattern, mode));
        });
        self.pending = Some(PendingSearch { generation, rx });
    }

    /// Non-blocking completion poll. `None` while the worker is still
    /// running or when no search is in flight.
    pub fn try_complete(&mut self) -> Option<SearchStatus> {
        let pending = self.pending.take()?;
        match pending.rx.try_recv() {
            Ok(result) => Some(self.apply(pending.generation, result)),
            Err(TryRecvError::Empty) => {
                self.pending = Some(pending);
                None
            }
            Err(TryRecvError::Disconnected) => {
                warn!("search {} worker died without a result", pending.generation);
                None
            }
        }
    }

    /// Blocks until the in-flight search completes. `None` when idle.
    pub fn wait(&mut self) -> Option<SearchStatus> {
        let pending = self.pending.take()?;
        match pending.rx.recv() {
            Ok(result) => Some(self.apply(pending.generation, result)),
            Err(_) => {
                warn!("search {} worker died without a result", pending.generation);
                None
            }
        }
    }

    fn apply(&mut self, generation: u64, result: FindResult) -> SearchStatus {
        if generation != self.generation {
            debug!("search {} discarded, superseded by {}", generation, self.generation);
            return SearchStatus::Superseded;
        }
        match result {
            Ok(spans) => {
                self.error = None;
                let total = spans.len();
                self.cursor.reset(spans);
                debug!("search {} complete: {} matches", generation, total);
                if total == 0 {
                    SearchStatus::NoMatches
                } else {
                    SearchStatus::Found { total }
                }
            }
            Err(err) => {
                // Prior matches stay navigable until a corrected pattern
                // is searched.
                warn!("search {} rejected: {}", generation, err);
                self.error = Some(err.clone());
                SearchStatus::Failed(err)
            }
        }
    }

    /// Steps to the neighboring match, wrapping at either end. No-op
    /// returning `None` when nothing is stored.
    pub fn advance(&mut self, direction: Direction) -> Option<Span> {
        self.cursor.advance(direction)
    }

    pub fn next_match(&mut self) -> Option<Span> {
        self.cursor.next()
    }

    pub fn previous_match(&mut self) -> Option<Span> {
        self.cursor.previous()
    }

    /// The match the host should highlight right now.
    pub fn current(&self) -> Option<Span> {
        self.cursor.current()
    }

    /// 1-based `(current, total)` for a status display.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.cursor.position()
    }

    pub fn match_count(&self) -> usize {
        self.cursor.len()
    }

    /// All stored spans, for host-side match painting.
    pub fn matches(&self) -> &[Span] {
        self.cursor.spans()
    }

    /// Text-buffer mutation hook: the stored spans index a stale snapshot.
    /// Also orphans any in-flight result for that snapshot.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.cursor.invalidate();
    }

    /// Search-field-cleared hook: drops matches, error, and any in-flight
    /// search.
    pub fn clear_pattern(&mut self) {
        self.generation += 1;
        self.pending = None;
        self.cursor.invalidate();
        self.error = None;
    }

    pub fn set_mode(&mut self, mode: SearchMode) {
        self.mode = mode;
    }

    /// The "use regex" checkbox. Takes effect on the next submit; it does
    /// not re-run the current search.
    pub fn toggle_regex(&mut self) {
        self.mode = match self.mode {
            SearchMode::Literal => SearchMode::Regex,
            SearchMode::Regex => SearchMode::Literal,
        };
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// The last pattern rejection, cleared by the next successful search.
    pub fn last_error(&self) -> Option<&PatternError> {
        self.error.as_ref()
    }

    /// True while a submitted search has not been completed or superseded.
    pub fn searching(&self) -> bool {
        self.pending.is_some()
    }
}
