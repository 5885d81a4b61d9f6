use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};
use course_scaffold::{
    config::Config,
    course,
    error::Result,
    report::ConsoleReporter,
    scaffold::Scaffolder,
};

fn main() -> Result<()> {
    let matches = cli().get_matches();
    let root = matches
        .get_one::<String>("root")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let json = matches.get_flag("json");

    let config = Config::load_or_default(&root)?;
    let tree = course::site::tree(&config.scaffold.content_dir);

    let mut scaffolder = Scaffolder::new();
    scaffolder.dry_run(matches.get_flag("dry-run"));

    if !json {
        scaffolder.with_reporter(ConsoleReporter);
    }

    let report = scaffolder.run(root, &tree)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Content structure for all 60 days updated successfully!");
    }

    Ok(())
}

fn cli() -> Command {
    Command::new("scaffold-site")
        .about("Materialize the algorithm course content tree")
        .arg(
            Arg::new("root")
                .long("root")
                .value_name("DIR")
                .help("Site root directory (defaults to the working directory)"),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .action(ArgAction::SetTrue)
                .help("Report what would be created without writing anything"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print a JSON report instead of per-path lines"),
        )
}
