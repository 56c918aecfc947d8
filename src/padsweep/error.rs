use thiserror::Error;

#[derive(Error, Debug)]
pub enum SweepError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error(
        "allowEtherPads is not disabled: anonymous pads may legitimately have no \
         mypads:pad record, so the orphan sweep would destroy live pads. \
         Set allowEtherPads to false before running this sweep."
    )]
    AnonymousPadsAllowed,
}

pub type Result<T> = std::result::Result<T, SweepError>;
