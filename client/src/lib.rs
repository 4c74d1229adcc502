//! # Client
//!
//! Terminal client for the invitation backend: `confirm` runs the RSVP form
//! flow (local validation first, then the endpoint), `list` renders the
//! guest list with occupancy the same way the site's people page does.

pub mod api;
pub mod form;
pub mod notify;
pub mod view;
