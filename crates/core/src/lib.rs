//! pylon_core - pure types and functions shared by the pylon client.
//!
//! Nothing in this crate performs I/O. Configuration parsing receives file
//! contents and an environment lookup, wire types only describe JSON shapes,
//! and formatting returns strings.

pub mod cal;
pub mod config;
pub mod discord;
pub mod http;
pub mod wire;
