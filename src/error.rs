use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdtError {
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("not enough operands for `{token}`")]
    StackUnderflow { token: String },

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("malformed expression: {0}")]
    MalformedExpression(String),

    #[error("mismatched parenthesis")]
    MismatchedParenthesis,

    #[error("cannot place disk {disk} on top of disk {onto}")]
    IllegalMove { disk: u32, onto: u32 },

    #[error("peg {0} has no disks")]
    EmptyPeg(char),

    #[error("no {0} page in history")]
    NoHistory(&'static str),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, AdtError>;
