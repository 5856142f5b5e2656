/// Reasons a submit with both drafts present is turned away
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EntryError {
    #[error("\"{0}\" is not a valid amount")]
    InvalidAmount(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Seed data is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Seed data contains duplicate id {0}")]
    DuplicateId(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Tracker config is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}
