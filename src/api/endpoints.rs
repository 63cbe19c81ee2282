use super::request::{Host, RequestDescriptor};
use super::routing::{Cluster, Division, Queue, Region, Tier};
use clap::Subcommand;

pub const ACCOUNT_BY_PUUID: &str = "/riot/account/v1/accounts/by-puuid/{puuid}";
pub const ACCOUNT_BY_RIOT_ID: &str = "/riot/account/v1/accounts/by-riot-id/{gameName}/{tagLine}";
pub const MASTERIES_BY_SUMMONER: &str =
    "/lol/champion-mastery/v4/champion-masteries/by-summoner/{encryptedSummonerId}";
pub const MASTERY_BY_SUMMONER_CHAMPION: &str = concat!(
    "/lol/champion-mastery/v4/champion-masteries/by-summoner/{encryptedSummonerId}",
    "/by-champion/{championId}"
);
pub const MASTERY_SCORE_BY_SUMMONER: &str =
    "/lol/champion-mastery/v4/scores/by-summoner/{encryptedSummonerId}";
pub const CHAMPION_ROTATIONS: &str = "/lol/platform/v3/champion-rotations";
pub const CLASH_PLAYERS_BY_SUMMONER: &str = "/lol/clash/v1/players/by-summoner/{summonerId}";
pub const CLASH_TEAM: &str = "/lol/clash/v1/teams/{teamId}";
pub const CLASH_TOURNAMENTS: &str = "/lol/clash/v1/tournaments";
pub const CLASH_TOURNAMENT_BY_TEAM: &str = "/lol/clash/v1/tournaments/by-team/{teamId}";
pub const CLASH_TOURNAMENT: &str = "/lol/clash/v1/tournaments/{tournamentId}";
pub const LEAGUE_EXP_ENTRIES: &str = "/lol/league-exp/v4/entries/{queue}/{tier}/{division}";
pub const CHALLENGER_LEAGUE: &str = "/lol/league/v4/challengerleagues/by-queue/{queue}";
pub const MASTER_LEAGUE: &str = "/lol/league/v4/masterleagues/by-queue/{queue}";
pub const GRANDMASTER_LEAGUE: &str = "/lol/league/v4/grandmasterleagues/by-queue/{queue}";
pub const LEAGUE_ENTRIES_BY_SUMMONER: &str =
    "/lol/league/v4/entries/by-summoner/{encryptedSummonerId}";
pub const LEAGUE_ENTRIES: &str = "/lol/league/v4/entries/{queue}/{tier}/{division}";
pub const LEAGUE: &str = "/lol/league/v4/leagues/{leagueId}";
pub const STATUS_SHARD_DATA: &str = "/lol/status/v3/shard-data";
pub const STATUS_PLATFORM_DATA: &str = "/lol/status/v4/platform-data";
pub const MATCH: &str = "/lol/match/v5/matches/{matchId}";
pub const MATCH_IDS_BY_PUUID: &str = "/lol/match/v5/matches/by-puuid/{puuid}/ids";
pub const MATCH_TIMELINE: &str = "/lol/match/v5/matches/{matchId}/timeline";
pub const ACTIVE_GAME_BY_SUMMONER: &str =
    "/lol/spectator/v4/active-games/by-summoner/{encryptedSummonerId}";
pub const FEATURED_GAMES: &str = "/lol/spectator/v4/featured-games";
pub const SUMMONER_BY_ACCOUNT: &str = "/lol/summoner/v4/summoners/by-account/{encryptedAccountId}";
pub const SUMMONER_BY_NAME: &str = "/lol/summoner/v4/summoners/by-name/{summonerName}";
pub const SUMMONER_BY_PUUID: &str = "/lol/summoner/v4/summoners/by-puuid/{encryptedPUUID}";
pub const SUMMONER_BY_ID: &str = "/lol/summoner/v4/summoners/{encryptedSummonerId}";

// Data Dragon
pub const DATA_DRAGON_CHAMPIONS: &str = "/cdn/{version}/data/{locale}/champion.json";
pub const DATA_DRAGON_VERSIONS: &str = "/api/versions.json";

/// One API call and its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Endpoint {
    /// Account by PUUID
    AccountByPuuid { cluster: Cluster, puuid: String },
    /// Account by Riot ID (game name + tag line)
    AccountByRiotId {
        cluster: Cluster,
        game_name: String,
        tag_line: String,
    },
    /// All champion mastery entries of a summoner, by points descending
    ChampionMasteries {
        region: Region,
        encrypted_summoner_id: String,
    },
    /// Mastery of one champion for a summoner
    ChampionMastery {
        region: Region,
        encrypted_summoner_id: String,
        champion_id: u64,
    },
    /// Total mastery score of a summoner
    MasteryScore {
        region: Region,
        encrypted_summoner_id: String,
    },
    /// Free-to-play champion rotation
    ChampionRotations { region: Region },
    /// Full Data Dragon champion list for a game version
    Champions { version: String },
    /// Clash players by summoner ID
    ClashPlayers { region: Region, summoner_id: String },
    /// Clash team by ID
    ClashTeam { region: Region, team_id: String },
    /// Active or upcoming clash tournaments
    ClashTournaments { region: Region },
    /// Clash tournament a team plays in
    ClashTournamentByTeam { region: Region, team_id: String },
    /// Clash tournament by ID
    ClashTournament { region: Region, tournament_id: u64 },
    /// League entries, experimental endpoint that also covers apex tiers
    LeagueExpEntries {
        region: Region,
        queue: Queue,
        tier: Tier,
        division: Division,
    },
    ChallengerLeague { region: Region, queue: Queue },
    MasterLeague { region: Region, queue: Queue },
    GrandmasterLeague { region: Region, queue: Queue },
    /// League entries in all queues for a summoner
    LeagueEntriesBySummoner {
        region: Region,
        encrypted_summoner_id: String,
    },
    /// League entries for a queue, tier and division
    LeagueEntries {
        region: Region,
        queue: Queue,
        tier: Tier,
        division: Division,
    },
    /// League by ID, including inactive entries
    League { region: Region, league_id: String },
    /// Shard status (status-v3, deprecated upstream)
    ShardData { region: Region },
    /// Platform status (status-v4)
    PlatformData { region: Region },
    /// Match by ID; the cluster comes from the ID prefix
    Match { match_id: String },
    /// Match IDs played by a PUUID
    MatchIds { cluster: Cluster, puuid: String },
    /// Match timeline by ID; the cluster comes from the ID prefix
    MatchTimeline { match_id: String },
    /// Game a summoner is currently playing
    ActiveGame {
        region: Region,
        encrypted_summoner_id: String,
    },
    FeaturedGames { region: Region },
    SummonerByAccount {
        region: Region,
        encrypted_account_id: String,
    },
    SummonerByName { region: Region, summoner_name: String },
    SummonerByPuuid { region: Region, encrypted_puuid: String },
    Summoner {
        region: Region,
        encrypted_summoner_id: String,
    },
    /// All Data Dragon versions, newest first
    Versions,
}

impl Endpoint {
    pub fn descriptor(&self) -> RequestDescriptor {
        use Endpoint::*;
        use RequestDescriptor as R;

        let platform = |region: &Region, template| R::new(Host::Platform(*region), template);
        let regional = |cluster: &Cluster, template| R::new(Host::Regional(*cluster), template);

        match self {
            AccountByPuuid { cluster, puuid } => {
                regional(cluster, ACCOUNT_BY_PUUID).param("puuid", puuid)
            }
            AccountByRiotId {
                cluster,
                game_name,
                tag_line,
            } => regional(cluster, ACCOUNT_BY_RIOT_ID)
                .param("gameName", game_name)
                .param("tagLine", tag_line),
            ChampionMasteries {
                region,
                encrypted_summoner_id,
            } => platform(region, MASTERIES_BY_SUMMONER)
                .param("encryptedSummonerId", encrypted_summoner_id),
            ChampionMastery {
                region,
                encrypted_summoner_id,
                champion_id,
            } => platform(region, MASTERY_BY_SUMMONER_CHAMPION)
                .param("encryptedSummonerId", encrypted_summoner_id)
                .param("championId", champion_id),
            MasteryScore {
                region,
                encrypted_summoner_id,
            } => platform(region, MASTERY_SCORE_BY_SUMMONER)
                .param("encryptedSummonerId", encrypted_summoner_id),
            ChampionRotations { region } => platform(region, CHAMPION_ROTATIONS),
            Champions { version } => {
                R::new(Host::DataDragon, DATA_DRAGON_CHAMPIONS).param("version", version)
            }
            ClashPlayers {
                region,
                summoner_id,
            } => platform(region, CLASH_PLAYERS_BY_SUMMONER).param("summonerId", summoner_id),
            ClashTeam { region, team_id } => platform(region, CLASH_TEAM).param("teamId", team_id),
            ClashTournaments { region } => platform(region, CLASH_TOURNAMENTS),
            ClashTournamentByTeam { region, team_id } => {
                platform(region, CLASH_TOURNAMENT_BY_TEAM).param("teamId", team_id)
            }
            ClashTournament {
                region,
                tournament_id,
            } => platform(region, CLASH_TOURNAMENT).param("tournamentId", tournament_id),
            LeagueExpEntries {
                region,
                queue,
                tier,
                division,
            } => platform(region, LEAGUE_EXP_ENTRIES)
                .param("queue", queue)
                .param("tier", tier)
                .param("division", division),
            ChallengerLeague { region, queue } => {
                platform(region, CHALLENGER_LEAGUE).param("queue", queue)
            }
            MasterLeague { region, queue } => platform(region, MASTER_LEAGUE).param("queue", queue),
            GrandmasterLeague { region, queue } => {
                platform(region, GRANDMASTER_LEAGUE).param("queue", queue)
            }
            LeagueEntriesBySummoner {
                region,
                encrypted_summoner_id,
            } => platform(region, LEAGUE_ENTRIES_BY_SUMMONER)
                .param("encryptedSummonerId", encrypted_summoner_id),
            LeagueEntries {
                region,
                queue,
                tier,
                division,
            } => platform(region, LEAGUE_ENTRIES)
                .param("queue", queue)
                .param("tier", tier)
                .param("division", division),
            League { region, league_id } => platform(region, LEAGUE).param("leagueId", league_id),
            ShardData { region } => platform(region, STATUS_SHARD_DATA),
            PlatformData { region } => platform(region, STATUS_PLATFORM_DATA),
            Match { match_id } => {
                regional(&Cluster::for_match_id(match_id), MATCH).param("matchId", match_id)
            }
            MatchIds { cluster, puuid } => {
                regional(cluster, MATCH_IDS_BY_PUUID).param("puuid", puuid)
            }
            MatchTimeline { match_id } => {
                regional(&Cluster::for_match_id(match_id), MATCH_TIMELINE)
                    .param("matchId", match_id)
            }
            ActiveGame {
                region,
                encrypted_summoner_id,
            } => platform(region, ACTIVE_GAME_BY_SUMMONER)
                .param("encryptedSummonerId", encrypted_summoner_id),
            FeaturedGames { region } => platform(region, FEATURED_GAMES),
            SummonerByAccount {
                region,
                encrypted_account_id,
            } => platform(region, SUMMONER_BY_ACCOUNT)
                .param("encryptedAccountId", encrypted_account_id),
            SummonerByName {
                region,
                summoner_name,
            } => platform(region, SUMMONER_BY_NAME).param("summonerName", summoner_name),
            SummonerByPuuid {
                region,
                encrypted_puuid,
            } => platform(region, SUMMONER_BY_PUUID).param("encryptedPUUID", encrypted_puuid),
            Summoner {
                region,
                encrypted_summoner_id,
            } => platform(region, SUMMONER_BY_ID)
                .param("encryptedSummonerId", encrypted_summoner_id),
            Versions => R::new(Host::DataDragon, DATA_DRAGON_VERSIONS),
        }
    }
}
