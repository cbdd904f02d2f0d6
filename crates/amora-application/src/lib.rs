//! Application layer for Amora.
//!
//! This crate provides the use case services that coordinate between the
//! domain models and the AI boundary: the matchmaking conversation and the
//! portrait gallery.

pub mod gallery;
pub mod matchmaker;

pub use gallery::GalleryService;
pub use matchmaker::MatchmakerService;
