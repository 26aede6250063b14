use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::format::DateFormatter;
use crate::phrase::PhraseParser;

/// Complete state of one date-entry widget instance.
///
/// `text` is the single source of truth for what the user sees. `date` is
/// `None` exactly when the current text does not resolve to a date.
/// `viewport_month` is the first day of the month the calendar popover
/// displays; it keeps pointing at the last good month even after the text
/// stops parsing, so the picker never goes blank mid-edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateInputState {
    pub text: String,
    pub date: Option<NaiveDate>,
    pub viewport_month: Option<NaiveDate>,
    pub open: bool,
}

/// Payload handed to the host after a reconciliation.
///
/// An absent `date` is the normal outcome for text the parser cannot
/// interpret, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateChange {
    pub text: String,
    pub date: Option<NaiveDate>,
}

/// One user interaction, tagged by its source.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInputEvent {
    /// The user typed into the text field.
    TextEdited(String),
    /// The user picked a date in the calendar, or cleared the selection.
    DateSelected(Option<NaiveDate>),
    /// The user navigated the calendar to another month.
    MonthChanged(NaiveDate),
    /// The trigger control or the down-arrow key opened the popover.
    PopoverOpened,
    /// The popover was dismissed without a selection.
    PopoverDismissed,
}

fn month_of(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

impl DateInputState {
    /// Builds the initial state from an optional seed string, parsing it
    /// eagerly. The popover always starts closed.
    pub fn from_seed(seed: Option<&str>, parser: &dyn PhraseParser) -> Self {
        let text = seed.unwrap_or_default().to_string();
        let date = parser.parse(&text);
        DateInputState {
            text,
            date,
            viewport_month: date.map(month_of),
            open: false,
        }
    }

    /// Text-edit reconciler: the new text always wins, then the parser
    /// decides whether a resolved date comes along with it.
    ///
    /// On a successful parse the viewport month follows the resolved date,
    /// even while the popover is open and the user has navigated elsewhere;
    /// typed text is an explicit statement of intent. On a failed parse the
    /// resolved date is dropped but the viewport month stays where it was.
    ///
    /// Returns the notification for the host. Fires on every keystroke;
    /// callers wanting debounced behavior debounce on their side.
    pub fn text_edited(&mut self, text: impl Into<String>, parser: &dyn PhraseParser) -> DateChange {
        self.text = text.into();
        match parser.parse(&self.text) {
            Some(date) => {
                self.date = Some(date);
                self.viewport_month = Some(month_of(date));
            }
            None => {
                self.date = None;
            }
        }
        DateChange {
            text: self.text.clone(),
            date: self.date,
        }
    }

    /// Calendar-selection reconciler: the one path where the text buffer is
    /// derived rather than user-authored. Selecting (or clearing) always
    /// closes the popover.
    pub fn date_selected(
        &mut self,
        date: Option<NaiveDate>,
        formatter: &dyn DateFormatter,
    ) -> DateChange {
        self.date = date;
        self.text = match date {
            Some(d) => formatter.format(d),
            None => String::new(),
        };
        self.open = false;
        DateChange {
            text: self.text.clone(),
            date: self.date,
        }
    }

    /// Records in-picker month navigation. No host notification; the month
    /// shown is presentation state until a date is actually selected.
    pub fn month_changed(&mut self, month: NaiveDate) {
        self.viewport_month = Some(month_of(month));
    }

    /// Opens the popover without touching text, date, or viewport month.
    pub fn open_popover(&mut self) {
        self.open = true;
    }

    /// Closes the popover, e.g. on click-outside or escape.
    pub fn close_popover(&mut self) {
        self.open = false;
    }

    /// Reducer entry point: applies one tagged event and returns the host
    /// notification if that event class produces one.
    pub fn apply(
        &mut self,
        event: DateInputEvent,
        parser: &dyn PhraseParser,
        formatter: &dyn DateFormatter,
    ) -> Option<DateChange> {
        match event {
            DateInputEvent::TextEdited(text) => Some(self.text_edited(text, parser)),
            DateInputEvent::DateSelected(date) => Some(self.date_selected(date, formatter)),
            DateInputEvent::MonthChanged(month) => {
                self.month_changed(month);
                None
            }
            DateInputEvent::PopoverOpened => {
                self.open_popover();
                None
            }
            DateInputEvent::PopoverDismissed => {
                self.close_popover();
                None
            }
        }
    }
}
