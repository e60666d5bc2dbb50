pub mod client;
pub mod endpoints;
pub mod metrics;
pub mod rate_gate;
pub mod region;
pub mod retry;
pub mod types;

pub use client::RiotClient;
pub use rate_gate::RateGate;
pub use region::{Platform, Region};
