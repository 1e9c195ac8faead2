//! This module defines all members of the feed domain
//! Please research hexagonal architecture pattern for more info

pub mod models;
pub mod ports;
pub mod services;
