#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

mod render;
mod replay;
mod tui;

use std::path::Path;

use anyhow::Context;
use clap::{ArgMatches, Command, arg};
use tianji_board::config::BoardLayout;


fn main() -> anyhow::Result<()> {
    // Logs go to stderr: stdout may carry the rendered page.
    env_logger::Builder::new()
        .target(env_logger::Target::Stderr)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let matches = Command::new("Tianji")
        .version(clap::crate_version!())
        .about("Tianji board developer console")
        .subcommand_required(true)
        .subcommand(
            Command::new("render")
                .about("Paint a game state snapshot into a standalone HTML page")
                .arg(arg!(<snapshot_file> "Path to the JSON-serialized game state"))
                .arg(arg!(--"layout" <layout_file> "Path to a yaml-serialized BoardLayout"))
                .arg(arg!(-'o' --"output" <output_file> "Output path (default: stdout)")),
        )
        .subcommand(
            Command::new("replay")
                .about("Feed a recorded session through the client and summarize the result")
                .arg(arg!(<session_file> "Path to the session: one JSON server event per line"))
                .arg(arg!(--"layout" <layout_file> "Path to a yaml-serialized BoardLayout")),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("render", sub_matches)) => render::run(render::RenderConfig {
            snapshot_file: required_arg(sub_matches, "snapshot_file")?,
            layout: read_layout(sub_matches)?,
            output_file: sub_matches.get_one::<String>("output").cloned(),
        }),
        Some(("replay", sub_matches)) => replay::run(replay::ReplayConfig {
            session_file: required_arg(sub_matches, "session_file")?,
            layout: read_layout(sub_matches)?,
        }),
        _ => unreachable!("Exhausted list of subcommands and subcommand_required prevents `None`"),
    }
}

fn required_arg(matches: &ArgMatches, name: &str) -> anyhow::Result<String> {
    matches.get_one::<String>(name).cloned().with_context(|| format!("Missing <{name}>"))
}

fn read_layout(matches: &ArgMatches) -> anyhow::Result<BoardLayout> {
    match matches.get_one::<String>("layout") {
        Some(filename) => read_layout_file(Path::new(filename)),
        None => Ok(BoardLayout::default()),
    }
}

fn read_layout_file(path: &Path) -> anyhow::Result<BoardLayout> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Reading layout file {}", path.display()))?;
    serde_yaml::from_str(&contents)
        .with_context(|| format!("Parsing layout file {}", path.display()))
}
