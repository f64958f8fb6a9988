//! Pata and norikae demo server.
//!
//! Two small pages: one merges two strings character by character
//! ("pata"), the other fetches a fantasy transit network and reports which
//! line serves a start or destination station ("norikae").

pub mod config;
pub mod domain;
pub mod interleave;
pub mod network;
pub mod resolve;
pub mod web;
