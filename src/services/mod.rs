//! Service layer: one module per entity plus the dashboard.
//!
//! These functions are the presentation boundary. They accept typed field
//! values, orchestrate the statement layer, and return either a tabular
//! result (reads) or a confirmation/failure message (writes). Errors always
//! carry the store's original message; callers display it verbatim.

pub mod claims;
pub mod dashboard;
pub mod listings;
pub mod providers;
pub mod receivers;
