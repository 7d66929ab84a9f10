#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! huddle — an offline meeting-room booking TUI.
//!
//! The crate is split into three layers: [`model`] holds the booking form
//! state and catalogs, [`journal`] records submitted bookings, and [`tui`]
//! renders the single booking screen and drives the event loop.

pub mod journal;
pub mod model;
pub mod tui;
