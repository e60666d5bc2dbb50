//! One typed method per Riot endpoint, implemented on [`super::RiotClient`].

mod account;
mod league;
mod match_v5;

pub use league::bracket_url;
