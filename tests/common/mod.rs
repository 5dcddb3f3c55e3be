use assert_cmd::Command;

pub type Result<A> = std::result::Result<A, Box<dyn std::error::Error>>;

pub fn mk_cmd() -> Result<Command> {
    Ok(Command::cargo_bin("nag")?)
}
