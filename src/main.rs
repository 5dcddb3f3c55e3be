use nag::error::{Error, Result};
use std::env;
use std::process;

const LOG_LEVEL: &str = "RUST_LOG";

#[tokio::main]
async fn main() {
    let error_style = console::Style::new().red().bright();
    tokio::select! {
        result = execute() => {
            if let Err(err) = result {
                println!("{}", error_style.apply_to(&err));
                process::exit(exit_code(&err));
            }
        }
        _ = tokio::signal::ctrl_c() => {
            println!("\nGoodbye!");
        }
    }
}

async fn execute() -> Result<()> {
    let opts = nag::read_args();
    let remove_env = match opts.common_opts.verbose {
        1 => set_log_level("info"),
        n => {
            if n > 1 {
                set_log_level("debug")
            } else {
                false
            }
        }
    };
    env_logger::init();

    let result = nag::execute_cmd(opts).await;
    if remove_env {
        env::remove_var(LOG_LEVEL);
    }
    result?;
    Ok(())
}

fn set_log_level(level: &str) -> bool {
    let current = env::var_os(LOG_LEVEL);
    if current.is_none() {
        env::set_var(LOG_LEVEL, level);
        true
    } else {
        false
    }
}

fn exit_code(err: &Error) -> i32 {
    match err {
        Error::Cmd { source: _ } => 1,
    }
}
