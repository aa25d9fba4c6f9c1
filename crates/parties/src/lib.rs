//! Parties domain module (clients, published language).
//!
//! This crate contains the client-side published language of the sales
//! domain: immutable snapshots other modules reference without owning the
//! client master data itself.

pub mod client;

pub use client::ClientData;
