#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParserError {
    #[error("line {0}: {1}")]
    MalformedInput(usize, String),
    #[error(transparent)]
    Core(#[from] padic_core::CoreError),
    #[error(transparent)]
    Ifs(#[from] padic_ifs::IfsError),
}
