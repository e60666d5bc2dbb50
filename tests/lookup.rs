use std::sync::Arc;
use std::time::Duration;

use httpmock::prelude::*;
use nonzero_ext::nonzero;
use rank_peers::{
    AppError,
    bracket::BracketMatcher,
    cache,
    config::ClientSettings,
    history::MatchHistory,
    pipeline::FetchPipeline,
    riot::{Platform, RiotClient},
};
use serde_json::json;

fn client(server: &MockServer) -> Arc<RiotClient> {
    let settings = ClientSettings::for_platform("TEST_KEY", Platform::NA1)
        .with_base_url(server.base_url())
        .with_rate_limit(nonzero!(1_u32), Duration::from_millis(1));
    Arc::new(RiotClient::new(settings).unwrap())
}

async fn mock_player(server: &MockServer) {
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/riot/account/v1/accounts/by-riot-id/Chalop/3012")
                .header("X-Riot-Token", "TEST_KEY");
            then.status(200).json_body(json!({
                "puuid": "puuid-1",
                "gameName": "Chalop",
                "tagLine": "3012"
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/lol/league/v4/entries/by-puuid/puuid-1");
            then.status(200).json_body(json!([
                {"queueType": "RANKED_SOLO_5x5", "tier": "PLATINUM", "rank": "III", "leaguePoints": 21},
                {"queueType": "RANKED_FLEX_SR", "tier": "GRANDMASTER", "rank": "I", "leaguePoints": 300}
            ]));
        })
        .await;
}

#[tokio::test]
async fn corrupt_cache_falls_back_to_the_api_and_is_rewritten() {
    let server = MockServer::start_async().await;
    mock_player(&server).await;
    let dir = tempfile::tempdir().unwrap();
    let path = cache::cache_path(dir.path(), "Chalop", "3012");
    std::fs::write(&path, b"\xde\xad\xbe\xef garbage").unwrap();

    let pipeline = FetchPipeline::new(client(&server));
    let profile = pipeline
        .resolve_player("Chalop", "3012", &path)
        .await
        .unwrap();

    assert_eq!(profile.identity.puuid, "puuid-1");
    assert_eq!(profile.ranks.len(), 2);
    assert_eq!(cache::load(&path).await.unwrap(), profile);
}

#[tokio::test]
async fn resolved_profile_feeds_bracket_matching_through_one_client() {
    let server = MockServer::start_async().await;
    mock_player(&server).await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/lol/league/v4/entries/RANKED_SOLO_5x5/PLATINUM/III")
                .query_param("page", "1");
            then.status(200).json_body(json!([
                {"puuid": "p-a", "queueType": "RANKED_SOLO_5x5", "tier": "PLATINUM", "rank": "III", "leaguePoints": 90},
                {"puuid": "p-b", "queueType": "RANKED_SOLO_5x5", "tier": "PLATINUM", "rank": "II", "leaguePoints": 90}
            ]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/lol/league/v4/grandmasterleagues/by-queue/RANKED_FLEX_SR");
            then.status(200).json_body(json!({
                "tier": "GRANDMASTER",
                "queue": "RANKED_FLEX_SR",
                "entries": [{"puuid": "gm", "rank": "I", "leaguePoints": 410}]
            }));
        })
        .await;

    let client = client(&server);
    let dir = tempfile::tempdir().unwrap();
    let path = cache::cache_path(dir.path(), "Chalop", "3012");
    let profile = FetchPipeline::new(client.clone())
        .resolve_player("Chalop", "3012", &path)
        .await
        .unwrap();
    let peers = BracketMatcher::new(client.clone())
        .find_peers(&profile)
        .await
        .unwrap();

    let ids: Vec<_> = peers.iter().map(|p| p.identity.puuid.as_str()).collect();
    assert_eq!(ids, vec!["p-a", "gm"]);
    assert_eq!(client.metrics().requests(), 4);
}

#[tokio::test]
async fn bracket_matching_returns_no_partial_list() {
    let server = MockServer::start_async().await;
    mock_player(&server).await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/lol/league/v4/entries/RANKED_SOLO_5x5/PLATINUM/III");
            then.status(200).json_body(json!([
                {"puuid": "p-a", "queueType": "RANKED_SOLO_5x5", "tier": "PLATINUM", "rank": "III", "leaguePoints": 90}
            ]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/lol/league/v4/grandmasterleagues/by-queue/RANKED_FLEX_SR");
            then.status(500);
        })
        .await;

    let client = client(&server);
    let dir = tempfile::tempdir().unwrap();
    let path = cache::cache_path(dir.path(), "Chalop", "3012");
    let profile = FetchPipeline::new(client.clone())
        .resolve_player("Chalop", "3012", &path)
        .await
        .unwrap();

    let res = BracketMatcher::new(client).find_peers(&profile).await;

    assert!(matches!(res, Err(AppError::Lookup { .. })));
}

#[tokio::test]
async fn history_keeps_every_match_but_the_failed_one() {
    let server = MockServer::start_async().await;
    let ids = ["NA1_1", "NA1_2", "NA1_3", "NA1_4", "NA1_5"];
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/lol/match/v5/matches/by-puuid/puuid-1/ids")
                .query_param("start", "0")
                .query_param("count", "5");
            then.status(200).json_body(json!(ids));
        })
        .await;
    for id in ids {
        if id == "NA1_3" {
            server
                .mock_async(|when, then| {
                    when.method(GET).path("/lol/match/v5/matches/NA1_3");
                    then.status(500);
                })
                .await;
        } else {
            server
                .mock_async(move |when, then| {
                    when.method(GET).path(format!("/lol/match/v5/matches/{id}"));
                    then.status(200).json_body(json!({
                        "metadata": {"matchId": id, "participants": ["puuid-1"]}
                    }));
                })
                .await;
        }
    }
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/riot/account/v1/accounts/by-puuid/puuid-1");
            then.status(200).json_body(json!({
                "puuid": "puuid-1",
                "gameName": "Chalop",
                "tagLine": "3012"
            }));
        })
        .await;

    let matches = MatchHistory::new(client(&server))
        .recent_matches("puuid-1")
        .await
        .unwrap();

    let got: Vec<_> = matches.iter().map(|m| m.match_id.as_str()).collect();
    assert_eq!(got, vec!["NA1_1", "NA1_2", "NA1_4", "NA1_5"]);
    assert!(matches.iter().all(|m| m.participants.len() == 1));
}
