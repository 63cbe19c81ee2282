//! Blocking client for the Riot Games API and the Data Dragon static data
//! mirror.
//!
//! Every call to the primary API is metered by a [`FixedWindowLimiter`]
//! (100 calls per 120 seconds by default, the development key limit).
//! Clients built from the same `Arc<FixedWindowLimiter>` share one budget.
//!
//! ```no_run
//! use loliglio::{Config, Region, RiotApiClient};
//!
//! let client = RiotApiClient::new(Config::new("RGAPI-..."));
//! let summoner = client.summoner_by_name(Region::Euw1, "Caps")?;
//! println!("{}", summoner["summonerLevel"]);
//! # Ok::<(), loliglio::AppError>(())
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod gateway;
pub mod http;
pub mod rate_limit;

#[cfg(test)]
mod test_utils;

pub use api::client::RiotApiClient;
pub use api::endpoints::Endpoint;
pub use api::models::{ChampionInfo, ChampionLookup};
pub use api::routing::{Cluster, Division, Queue, Region, Tier};
pub use config::Config;
pub use error::AppError;
pub use rate_limit::FixedWindowLimiter;
