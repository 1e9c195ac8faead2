//! This module defines the inbound adapters: caller-owned policies that
//! drive the feed domain

pub mod polling_refresher;
