use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use rank_peers::{
    AppError, bracket::BracketMatcher, cache, config::Config, logging, pipeline::FetchPipeline,
    riot::RiotClient,
};
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = logging::init() {
        eprintln!("failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AppError> {
    let (game_name, tag_line) = riot_id_from_args()?;
    let config = Config::from_env()?;

    info!(
        "🐙 Starting lookup for {}#{} on {} ({})",
        game_name,
        tag_line,
        config.platform,
        config.platform.to_region()
    );

    let client = Arc::new(RiotClient::new(config.client_settings())?);
    let pipeline = FetchPipeline::new(client.clone());
    let matcher = BracketMatcher::new(client.clone());

    let path = cache::cache_path(&config.cache_dir, &game_name, &tag_line);
    let profile = pipeline.resolve_player(&game_name, &tag_line, &path).await?;

    for entry in &profile.ranks {
        info!(
            "🏅 {} {} {} {} LP (score {})",
            entry.queue_label(),
            entry.tier,
            entry.division.as_deref().unwrap_or(""),
            entry.league_points,
            entry.rank_score
        );
    }

    let peers = matcher.find_peers(&profile).await?;
    for peer in &peers {
        if let Some(entry) = peer.ranks.first() {
            info!(
                "🎯 {} {} {} (score {})",
                peer.identity.puuid,
                entry.queue_label(),
                entry.tier,
                entry.rank_score
            );
        }
    }

    client.metrics().log_summary();
    Ok(())
}

/// `rank-peers <game name> <tag>` or `rank-peers "<game name>#<tag>"`.
fn riot_id_from_args() -> Result<(String, String), AppError> {
    let args: Vec<String> = env::args().skip(1).collect();
    let usage = || AppError::Config("usage: rank-peers <game name> <tag>".into());

    match args.as_slice() {
        [riot_id] => riot_id
            .rsplit_once('#')
            .map(|(name, tag)| (name.to_string(), tag.to_string()))
            .ok_or_else(usage),
        [name @ .., tag] if !name.is_empty() => Ok((name.join(" "), tag.clone())),
        _ => Err(usage()),
    }
}
