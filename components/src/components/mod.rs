pub mod calendar;
pub mod card;
pub mod date_input;
pub mod nav;
pub mod toast;
