#![deny(missing_docs)]
//! This crate implements the synchronized notification feed of the admin
//! console following the hexagonal architecture pattern: the domain owns an
//! eventually-consistent local view of the remote notification ledger and
//! mediates every read/unread transition between consumers and the service.

pub mod domain;
pub mod inbound;
pub mod outbound;
