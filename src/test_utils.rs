use crate::api::endpoints::Endpoint;
use crate::api::routing::{Cluster, Division, Queue, Region, Tier};
use crate::error::AppError;
use crate::http::{HttpResponse, Transport};
use crate::rate_limit::Clock;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Clock whose `sleep` advances virtual time instead of blocking.
pub struct ManualClock {
    now: Mutex<Instant>,
    sleeps: Mutex<Vec<Duration>>,
}

impl ManualClock {
    pub fn new() -> Arc<Self> {
        Arc::new(ManualClock {
            now: Mutex::new(Instant::now()),
            sleeps: Mutex::new(Vec::new()),
        })
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock().unwrap() += by;
    }

    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap()
    }

    fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
        self.advance(duration);
    }
}

/// Transport that replays canned responses and records every requested URL.
/// Once the script runs out it answers `200 {}`.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<HttpResponse>>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(ScriptedTransport::default())
    }

    pub fn push(&self, status: u16, body: &str) {
        self.responses.lock().unwrap().push_back(HttpResponse {
            status,
            body: body.to_string(),
        });
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for ScriptedTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, AppError> {
        self.requests.lock().unwrap().push(url.to_string());
        Ok(self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(HttpResponse {
                status: 200,
                body: "{}".to_string(),
            }))
    }
}

/// One of each variant.
pub fn sample_endpoints() -> Vec<Endpoint> {
    use crate::api::endpoints::Endpoint::*;
    let region = Region::La2;
    let summoner = "s-Id 42".to_string();
    vec![
        AccountByPuuid {
            cluster: Cluster::Americas,
            puuid: "p-uu/id".to_string(),
        },
        AccountByRiotId {
            cluster: Cluster::Asia,
            game_name: " 무작위의".to_string(),
            tag_line: "KR1".to_string(),
        },
        ChampionMasteries {
            region,
            encrypted_summoner_id: summoner.clone(),
        },
        ChampionMastery {
            region,
            encrypted_summoner_id: summoner.clone(),
            champion_id: 1,
        },
        MasteryScore {
            region,
            encrypted_summoner_id: summoner.clone(),
        },
        ChampionRotations { region },
        Champions {
            version: "12.4.1".to_string(),
        },
        ClashPlayers {
            region,
            summoner_id: summoner.clone(),
        },
        ClashTeam {
            region,
            team_id: "team-1".to_string(),
        },
        ClashTournaments { region },
        ClashTournamentByTeam {
            region,
            team_id: "team-1".to_string(),
        },
        ClashTournament {
            region,
            tournament_id: 2001,
        },
        LeagueExpEntries {
            region,
            queue: Queue::RankedSolo5x5,
            tier: Tier::Diamond,
            division: Division::I,
        },
        ChallengerLeague {
            region,
            queue: Queue::RankedFlexSr,
        },
        MasterLeague {
            region,
            queue: Queue::RankedFlexSr,
        },
        GrandmasterLeague {
            region,
            queue: Queue::RankedFlexTt,
        },
        LeagueEntriesBySummoner {
            region,
            encrypted_summoner_id: summoner.clone(),
        },
        LeagueEntries {
            region,
            queue: Queue::RankedSolo5x5,
            tier: Tier::Silver,
            division: Division::IV,
        },
        League {
            region,
            league_id: "f3b585a2-8b09-3940-b3fc-d2e404f2a5c4".to_string(),
        },
        ShardData { region },
        PlatformData { region },
        Match {
            match_id: "LA2_1138947703".to_string(),
        },
        MatchIds {
            cluster: Cluster::Europe,
            puuid: "puuid".to_string(),
        },
        MatchTimeline {
            match_id: "LA2_1138947703".to_string(),
        },
        ActiveGame {
            region,
            encrypted_summoner_id: summoner.clone(),
        },
        FeaturedGames { region },
        SummonerByAccount {
            region,
            encrypted_account_id: "acct".to_string(),
        },
        SummonerByName {
            region,
            summoner_name: "Faker Jr".to_string(),
        },
        SummonerByPuuid {
            region,
            encrypted_puuid: "puuid".to_string(),
        },
        Summoner {
            region,
            encrypted_summoner_id: summoner,
        },
        Versions,
    ]
}
