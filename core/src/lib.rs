//! Headless state core for the CareBoard date-entry widget.
//!
//! Keeps three representations of one date mutually consistent, no matter
//! which input path produced the change: the raw text the user is editing,
//! the resolved calendar date, and the month the picker displays. The
//! view layer (careboard-components) renders this state; hosts observe it
//! through the [`DateChange`] notifications the reconcilers return.

pub mod format;
pub mod phrase;
pub mod state;

pub use format::{DateFormatter, LongDateFormatter};
pub use phrase::{NaturalPhraseParser, PhraseParser};
pub use state::{DateChange, DateInputEvent, DateInputState};
