//! Yew component library for the CareBoard healthcare dashboard.
//!
//! The interesting piece is [`components::date_input::DateInput`], a
//! free-text date entry widget backed by the reconciliation core in
//! `careboard-core`. The rest are thin declarative wrappers (cards,
//! navigation, toasts) shared across dashboard pages.

pub mod components;
pub mod services;

pub use components::calendar::Calendar;
pub use components::card::Card;
pub use components::date_input::DateInput;
pub use components::nav::{NavItem, SidebarNav};
pub use components::toast::{Toast, ToastLevel};
