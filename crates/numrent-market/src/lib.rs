//! # numrent-market
//!
//! The marketplace core: every operation the transport layer exposes, built
//! directly on the persistence gateway in `numrent-db`. Each operation is a
//! short-lived request/response — no background tasks, no in-memory state.
//!
//! - [`lifecycle`] — number status transitions and their derived fields
//! - [`stopwork`] — buyer suspension plus atomic inventory reclamation
//! - [`search`] — combinable filtering over the inventory
//! - [`invoice`] — daily billing reconstruction from rental timestamps
//! - [`moderation`] — manual buyer/seller bans
//! - [`billing`] — payment-history lookup
//! - [`registry`] — validated account and inventory intake

pub mod billing;
pub mod invoice;
pub mod lifecycle;
pub mod moderation;
pub mod registry;
pub mod search;
pub mod stopwork;
