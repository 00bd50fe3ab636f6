//! Search and match navigation for the Jot text editor.
//!
//! [`find`] computes the non-overlapping, case-insensitive matches of a
//! literal or regex pattern over a text snapshot. [`MatchCursor`] turns one
//! result set into wraparound next/previous navigation. [`SearchSession`]
//! ties the two together for a host UI: each search runs off-thread and the
//! result comes back over a single-shot channel, with newer submissions
//! superseding older in-flight ones.
//!
//! The crate computes spans only. Moving the caret to `span.end`, selecting
//! `[start, end)` and focusing the text widget are the host's side of the
//! contract.

mod cursor;
mod finder;
mod session;

pub use cursor::{Direction, MatchCursor, Span};
pub use finder::{PatternError, SearchMode, find};
pub use session::{SearchSession, SearchStatus};
