pub mod opts;
pub mod sink;

use self::opts::{Format, MainOpts};
use self::sink::Error as SinkError;
use crate::httpclient::data::NewsSummary;
use crate::httpclient::{self, Client, API_BASE};
use snafu::{ResultExt, Snafu};

#[derive(Debug, Snafu)]
pub enum CmdError {
    #[snafu(display("An http error occurred: {}", source))]
    HttpClient { source: httpclient::Error },

    #[snafu(display("Error writing data: {}", source))]
    WriteResult { source: SinkError },
}

pub async fn execute_cmd(opts: MainOpts) -> Result<(), CmdError> {
    let client = Client::new(API_BASE).context(HttpClientSnafu)?;
    let format = opts.format();

    // Raw output is a single line of JSON, nothing else.
    if format == Format::Pretty {
        println!("Fetching data from {}/{}...", API_BASE, opts.endpoint);
        if opts.endpoint == "news" {
            println!("Limit: {}", opts.limit);
        }
        println!();
    }

    log::info!("Fetching endpoint: {}", opts.endpoint);
    let body = client
        .fetch(&opts.endpoint, opts.limit, opts.common_opts.verbose > 1)
        .await
        .context(HttpClientSnafu)?;

    sink::write_value(format, &body).context(WriteResultSnafu)?;

    if format == Format::Pretty && opts.endpoint == "news" {
        if let Some(summary) = NewsSummary::from_value(&body) {
            println!();
            println!("Summary:");
            println!("{}", summary);
        }
    }
    Ok(())
}
