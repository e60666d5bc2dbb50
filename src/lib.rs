//! Ranked standing lookup and bracket peer discovery on top of the Riot API.
//!
//! A [`riot::RiotClient`] owns the API key, the shared rate gate and the
//! retrying fetcher. [`pipeline::FetchPipeline`] resolves a player through the
//! file [`cache`], [`bracket::BracketMatcher`] finds players in the same
//! brackets and [`history::MatchHistory`] lists recent matches.

pub mod bracket;
pub mod cache;
pub mod config;
pub mod error;
pub mod history;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod riot;
pub mod score;

pub use error::AppError;
