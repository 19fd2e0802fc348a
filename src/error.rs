#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("cannot parse {input:?} as a decimal integer: {kind}")]
    Parse { input: String, kind: ParseErrorKind },
    #[error("invalid argument {arg}: {msg}")]
    InvalidArgument { arg: &'static str, msg: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("input is empty")]
    Empty,
    #[error("sign is not followed by any digits")]
    BareSign,
    #[error("invalid character {character:?} at byte {index}")]
    InvalidDigit { character: char, index: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
