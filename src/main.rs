use anyhow::bail;
use clap::{command, Arg, ArgAction};
use generator::{load_posts_newest_first, produce_overview};
use std::path::PathBuf;

mod generator;
mod metadata;
mod renderer;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = command!()
        .args(&[
            Arg::new("posts_dir")
                .help("Directory path of markdown posts")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value("posts"),
            Arg::new("json")
                .long("json")
                .help("Print the post metadata as JSON instead of HTML")
                .action(ArgAction::SetTrue),
        ])
        .get_matches();

    let Some(posts_dir) = matches.get_one::<PathBuf>("posts_dir") else {
        bail!("posts_dir is required.");
    };
    if !posts_dir.is_dir() {
        bail!("posts_dir({posts_dir:?}) must be a directory.");
    }

    if matches.get_flag("json") {
        let posts = load_posts_newest_first(posts_dir)?;
        println!("{}", serde_json::to_string_pretty(&posts)?);
    } else {
        println!("{}", produce_overview(posts_dir)?);
    }

    Ok(())
}
