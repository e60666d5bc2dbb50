use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Riot API error: {status} - {message}")]
    RiotApi { status: u16, message: String },

    #[error("Rate limited by the Riot API, gave up after {attempts} attempts on {url}")]
    RetryExhausted { url: String, attempts: u32 },

    #[error("Malformed {call} response: {source}")]
    MalformedResponse {
        call: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Player not found: {game_name}#{tag_line}")]
    PlayerNotFound { game_name: String, tag_line: String },

    #[error("{stage} failed for {subject}: {source}")]
    Lookup {
        stage: &'static str,
        subject: String,
        #[source]
        source: Box<AppError>,
    },

    #[error("Cache I/O error: {0}")]
    CacheIo(#[from] std::io::Error),

    #[error("Cache format error: {0}")]
    CacheFormat(serde_json::Error),

    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Wrap an error with the lookup stage and the player it concerns.
    pub fn in_stage(self, stage: &'static str, subject: impl Into<String>) -> Self {
        AppError::Lookup {
            stage,
            subject: subject.into(),
            source: Box::new(self),
        }
    }

    /// Status code carried by a remote error, looking through lookup context.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::RiotApi { status, .. } => Some(*status),
            AppError::Lookup { source, .. } => source.status(),
            _ => None,
        }
    }
}
