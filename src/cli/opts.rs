use clap::{ArgAction, Parser};

/// Main options, available independent of the selected endpoint.
#[derive(Parser, Debug, Clone)]
#[command()]
pub struct CommonOpts {
    /// Be more verbose when logging. Verbosity increases with each
    /// occurence of that option.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// This is a small diagnostic client for the news aggregator HTTP
/// API. It queries a single endpoint of the api gateway and prints
/// the JSON response, either raw or pretty printed with a short
/// summary for the news endpoint.
#[derive(Parser, Debug)]
#[command(name = "nag", version)]
pub struct MainOpts {
    #[clap(flatten)]
    pub common_opts: CommonOpts,

    /// Number of news items to request. Only forwarded to the server
    /// when querying the `news` endpoint.
    #[arg(short, long, default_value_t = 5)]
    pub limit: u32,

    /// The api endpoint to query, for example `news` or `health`. It
    /// is not checked against a known set, any value is passed to the
    /// server as given.
    #[arg(short, long, default_value = "news")]
    pub endpoint: String,

    /// Print the response as a single line of compact JSON instead of
    /// the indented form with summary.
    #[arg(long)]
    pub raw: bool,
}

impl MainOpts {
    /// The output format selected by the `--raw` flag.
    pub fn format(&self) -> Format {
        if self.raw {
            Format::Raw
        } else {
            Format::Pretty
        }
    }
}

/// The format for presenting the response body.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Format {
    Raw,
    Pretty,
}
