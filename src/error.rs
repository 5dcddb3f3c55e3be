//! Global error types

use crate::cli;
use snafu::Snafu;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("{}", source))]
    Cmd { source: cli::CmdError },
}

pub type Result<A> = std::result::Result<A, Error>;

impl From<cli::CmdError> for Error {
    fn from(e: cli::CmdError) -> Error {
        Error::Cmd { source: e }
    }
}
