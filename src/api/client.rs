use crate::config::Config;
use crate::error::AppError;
use crate::gateway::Gateway;
use crate::http::{Transport, UreqTransport};
use crate::rate_limit::FixedWindowLimiter;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use super::endpoints::Endpoint;
use super::models::{ChampionInfo, ChampionLookup, DataDragonChampions};
use super::request::UrlBuilder;
use super::routing::{Cluster, Division, Queue, Region, Tier};

pub struct RiotApiClient<T = UreqTransport> {
    urls: UrlBuilder,
    gateway: Gateway<T>,
}

impl RiotApiClient<UreqTransport> {
    /// Client with its own call budget taken from the config.
    ///
    /// Two clients built this way each get the full budget. Clients sharing
    /// one API key should be built with [`RiotApiClient::with_limiter`] and
    /// a common limiter instead.
    pub fn new(config: Config) -> Self {
        let limiter = Arc::new(FixedWindowLimiter::new(config.budget, config.window));
        RiotApiClient::with_limiter(config, limiter)
    }

    /// Client drawing from a budget shared with other clients.
    pub fn with_limiter(config: Config, limiter: Arc<FixedWindowLimiter>) -> Self {
        let mut gateway = Gateway::new(limiter);
        if let Some(per_second) = config.burst_per_second {
            gateway = gateway.with_burst_limit(per_second);
        }
        RiotApiClient::with_gateway(&config, gateway)
    }
}

impl<T: Transport> RiotApiClient<T> {
    pub fn with_gateway(config: &Config, gateway: Gateway<T>) -> Self {
        RiotApiClient {
            urls: UrlBuilder::new(config.api_key.clone(), config.locale.clone()),
            gateway,
        }
    }

    pub fn limiter(&self) -> &Arc<FixedWindowLimiter> {
        self.gateway.limiter()
    }

    /// The URL `fetch` would request, without any network I/O.
    pub fn url(&self, endpoint: &Endpoint) -> String {
        self.urls.build(&endpoint.descriptor())
    }

    pub fn fetch(&self, endpoint: &Endpoint) -> Result<Value, AppError> {
        let descriptor = endpoint.descriptor();
        let url = self.urls.build(&descriptor);
        self.gateway.call(&url, descriptor.host.is_rate_limited())
    }

    // account-v1

    pub fn account_by_puuid(&self, cluster: Cluster, puuid: &str) -> Result<Value, AppError> {
        self.fetch(&Endpoint::AccountByPuuid {
            cluster,
            puuid: puuid.to_string(),
        })
    }

    pub fn account_by_riot_id(
        &self,
        cluster: Cluster,
        game_name: &str,
        tag_line: &str,
    ) -> Result<Value, AppError> {
        self.fetch(&Endpoint::AccountByRiotId {
            cluster,
            game_name: game_name.to_string(),
            tag_line: tag_line.to_string(),
        })
    }

    // champion-mastery-v4

    pub fn champion_masteries(
        &self,
        region: Region,
        encrypted_summoner_id: &str,
    ) -> Result<Value, AppError> {
        self.fetch(&Endpoint::ChampionMasteries {
            region,
            encrypted_summoner_id: encrypted_summoner_id.to_string(),
        })
    }

    pub fn champion_mastery(
        &self,
        region: Region,
        encrypted_summoner_id: &str,
        champion_id: u64,
    ) -> Result<Value, AppError> {
        self.fetch(&Endpoint::ChampionMastery {
            region,
            encrypted_summoner_id: encrypted_summoner_id.to_string(),
            champion_id,
        })
    }

    pub fn mastery_score(
        &self,
        region: Region,
        encrypted_summoner_id: &str,
    ) -> Result<Value, AppError> {
        self.fetch(&Endpoint::MasteryScore {
            region,
            encrypted_summoner_id: encrypted_summoner_id.to_string(),
        })
    }

    // champion-v3

    pub fn champion_rotations(&self, region: Region) -> Result<Value, AppError> {
        self.fetch(&Endpoint::ChampionRotations { region })
    }

    // clash-v1

    pub fn clash_players(&self, region: Region, summoner_id: &str) -> Result<Value, AppError> {
        self.fetch(&Endpoint::ClashPlayers {
            region,
            summoner_id: summoner_id.to_string(),
        })
    }

    pub fn clash_team(&self, region: Region, team_id: &str) -> Result<Value, AppError> {
        self.fetch(&Endpoint::ClashTeam {
            region,
            team_id: team_id.to_string(),
        })
    }

    pub fn clash_tournaments(&self, region: Region) -> Result<Value, AppError> {
        self.fetch(&Endpoint::ClashTournaments { region })
    }

    pub fn clash_tournament_by_team(
        &self,
        region: Region,
        team_id: &str,
    ) -> Result<Value, AppError> {
        self.fetch(&Endpoint::ClashTournamentByTeam {
            region,
            team_id: team_id.to_string(),
        })
    }

    pub fn clash_tournament(&self, region: Region, tournament_id: u64) -> Result<Value, AppError> {
        self.fetch(&Endpoint::ClashTournament {
            region,
            tournament_id,
        })
    }

    // league-exp-v4 / league-v4

    pub fn league_exp_entries(
        &self,
        region: Region,
        queue: Queue,
        tier: Tier,
        division: Division,
    ) -> Result<Value, AppError> {
        self.fetch(&Endpoint::LeagueExpEntries {
            region,
            queue,
            tier,
            division,
        })
    }

    pub fn challenger_league(&self, region: Region, queue: Queue) -> Result<Value, AppError> {
        self.fetch(&Endpoint::ChallengerLeague { region, queue })
    }

    pub fn master_league(&self, region: Region, queue: Queue) -> Result<Value, AppError> {
        self.fetch(&Endpoint::MasterLeague { region, queue })
    }

    pub fn grandmaster_league(&self, region: Region, queue: Queue) -> Result<Value, AppError> {
        self.fetch(&Endpoint::GrandmasterLeague { region, queue })
    }

    pub fn league_entries_by_summoner(
        &self,
        region: Region,
        encrypted_summoner_id: &str,
    ) -> Result<Value, AppError> {
        self.fetch(&Endpoint::LeagueEntriesBySummoner {
            region,
            encrypted_summoner_id: encrypted_summoner_id.to_string(),
        })
    }

    pub fn league_entries(
        &self,
        region: Region,
        queue: Queue,
        tier: Tier,
        division: Division,
    ) -> Result<Value, AppError> {
        self.fetch(&Endpoint::LeagueEntries {
            region,
            queue,
            tier,
            division,
        })
    }

    pub fn league(&self, region: Region, league_id: &str) -> Result<Value, AppError> {
        self.fetch(&Endpoint::League {
            region,
            league_id: league_id.to_string(),
        })
    }

    // lol-status

    pub fn shard_data(&self, region: Region) -> Result<Value, AppError> {
        self.fetch(&Endpoint::ShardData { region })
    }

    pub fn platform_data(&self, region: Region) -> Result<Value, AppError> {
        self.fetch(&Endpoint::PlatformData { region })
    }

    // match-v5

    pub fn get_match(&self, match_id: &str) -> Result<Value, AppError> {
        self.fetch(&Endpoint::Match {
            match_id: match_id.to_string(),
        })
    }

    pub fn match_ids(&self, cluster: Cluster, puuid: &str) -> Result<Value, AppError> {
        self.fetch(&Endpoint::MatchIds {
            cluster,
            puuid: puuid.to_string(),
        })
    }

    pub fn match_timeline(&self, match_id: &str) -> Result<Value, AppError> {
        self.fetch(&Endpoint::MatchTimeline {
            match_id: match_id.to_string(),
        })
    }

    // spectator-v4

    pub fn active_game(
        &self,
        region: Region,
        encrypted_summoner_id: &str,
    ) -> Result<Value, AppError> {
        self.fetch(&Endpoint::ActiveGame {
            region,
            encrypted_summoner_id: encrypted_summoner_id.to_string(),
        })
    }

    pub fn featured_games(&self, region: Region) -> Result<Value, AppError> {
        self.fetch(&Endpoint::FeaturedGames { region })
    }

    // summoner-v4

    pub fn summoner_by_account(
        &self,
        region: Region,
        encrypted_account_id: &str,
    ) -> Result<Value, AppError> {
        self.fetch(&Endpoint::SummonerByAccount {
            region,
            encrypted_account_id: encrypted_account_id.to_string(),
        })
    }

    pub fn summoner_by_name(&self, region: Region, summoner_name: &str) -> Result<Value, AppError> {
        self.fetch(&Endpoint::SummonerByName {
            region,
            summoner_name: summoner_name.to_string(),
        })
    }

    pub fn summoner_by_puuid(
        &self,
        region: Region,
        encrypted_puuid: &str,
    ) -> Result<Value, AppError> {
        self.fetch(&Endpoint::SummonerByPuuid {
            region,
            encrypted_puuid: encrypted_puuid.to_string(),
        })
    }

    pub fn summoner(&self, region: Region, encrypted_summoner_id: &str) -> Result<Value, AppError> {
        self.fetch(&Endpoint::Summoner {
            region,
            encrypted_summoner_id: encrypted_summoner_id.to_string(),
        })
    }

    // Data Dragon, not rate limited

    pub fn champions(&self, version: &str) -> Result<Value, AppError> {
        self.fetch(&Endpoint::Champions {
            version: version.to_string(),
        })
    }

    pub fn champion_data(&self, version: &str) -> Result<DataDragonChampions, AppError> {
        Ok(serde_json::from_value(self.champions(version)?)?)
    }

    pub fn champion_names(&self, version: &str) -> Result<Vec<String>, AppError> {
        Ok(self.champion_data(version)?.names())
    }

    pub fn champion_ids(&self, version: &str) -> Result<Vec<String>, AppError> {
        Ok(self.champion_data(version)?.ids())
    }

    pub fn champion_keys(&self, version: &str) -> Result<Vec<u32>, AppError> {
        Ok(self.champion_data(version)?.keys())
    }

    pub fn find_champion(
        &self,
        version: &str,
        lookup: &ChampionLookup,
    ) -> Result<Option<ChampionInfo>, AppError> {
        let champions = self.champion_data(version)?;
        let found = champions.find(lookup).cloned();
        if found.is_none() {
            debug!(?lookup, version, "champion not found");
        }
        Ok(found)
    }

    pub fn versions(&self) -> Result<Vec<String>, AppError> {
        Ok(serde_json::from_value(self.fetch(&Endpoint::Versions)?)?)
    }

    pub fn last_version(&self) -> Result<String, AppError> {
        self.versions()?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::JsonError("Data Dragon returned no versions".to_string()))
    }
}
