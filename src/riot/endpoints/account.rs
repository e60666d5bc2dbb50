use crate::error::AppError;
use crate::model::PlayerIdentity;
use crate::riot::client::RiotClient;
use crate::riot::types::AccountDto;

impl RiotClient {
    /// Get account by Riot ID (game name + tag line)
    /// Uses regional routing (americas, europe, asia, sea)
    pub async fn get_account_by_riot_id(
        &self,
        game_name: &str,
        tag_line: &str,
    ) -> Result<PlayerIdentity, AppError> {
        tracing::trace!(
            "[RIOT::CLIENT] get_account_by_riot_id {}#{}",
            game_name,
            tag_line
        );
        let url = format!(
            "{}/riot/account/v1/accounts/by-riot-id/{}/{}",
            self.regional_url(),
            urlencoding::encode(game_name),
            urlencoding::encode(tag_line)
        );

        self.get::<AccountDto>(&url, "account by riot id")
            .await
            .map(PlayerIdentity::from)
            .map_err(|e| {
                if matches!(&e, AppError::RiotApi { status: 404, .. }) {
                    AppError::PlayerNotFound {
                        game_name: game_name.to_string(),
                        tag_line: tag_line.to_string(),
                    }
                } else {
                    e
                }
            })
    }

    /// Get account by PUUID
    /// Uses regional routing (americas, europe, asia, sea)
    pub async fn get_account_by_puuid(&self, puuid: &str) -> Result<PlayerIdentity, AppError> {
        tracing::trace!("[RIOT::CLIENT] get_account_by_puuid {}", puuid);
        let url = format!(
            "{}/riot/account/v1/accounts/by-puuid/{}",
            self.regional_url(),
            urlencoding::encode(puuid)
        );

        self.get::<AccountDto>(&url, "account by puuid")
            .await
            .map(PlayerIdentity::from)
    }
}
