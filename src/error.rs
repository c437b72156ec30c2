use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("State lock poisoned: `{0}`")]
    StatePoisoned(&'static str),

    #[error("Unknown database kind '{0}'")]
    UnknownKind(String),

    #[error("Unknown draft field '{0}'")]
    UnknownField(String),

    #[error("Unknown route '{0}'")]
    UnknownRoute(String),
}

pub type Result<T = ()> = std::result::Result<T, AppError>;
