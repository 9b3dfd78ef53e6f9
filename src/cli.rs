// src/cli.rs
use std::{env, path::PathBuf};

use color_eyre::eyre::{Result, eyre};
use url::Url;

use crate::config::options::{QueuePolicy, RunOptions};
use crate::progress::CliProgress;
use crate::runner;

pub async fn run() -> Result<()> {
    let mut opts = RunOptions::default();
    parse_cli(&mut opts)?;

    if opts.list_categories {
        for category in runner::list_categories(&opts).await? {
            println!("{},{}", category.name, category.url);
        }
        return Ok(());
    }

    let mut progress = CliProgress::default();
    let summary = runner::run(&opts, Some(&mut progress)).await?;
    println!(
        "done: {} new, {} queued, {} detailed",
        summary.inserted, summary.queued, summary.detailed
    );
    Ok(())
}

fn parse_cli(opts: &mut RunOptions) -> Result<()> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--base" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --base"))?;
                opts.base = Url::parse(&v)?;
            }
            "--data" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --data"))?;
                opts.data_dir = PathBuf::from(v);
            }
            "--queue-mode" => {
                let v = args
                    .next()
                    .ok_or_else(|| eyre!("Missing value for --queue-mode"))?;
                opts.queue_policy = match v.to_ascii_lowercase().as_str() {
                    "recompute" => QueuePolicy::Recompute,
                    "respect-disk" => QueuePolicy::RespectDisk,
                    other => return Err(eyre!("Unknown queue mode: {other}")),
                };
            }
            "--skip-details" => opts.skip_details = true,
            "--no-queue" => opts.no_queue = true,
            "--merge" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --merge"))?;
                opts.merge_path = Some(PathBuf::from(v));
            }
            "--list-categories" => opts.list_categories = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(eyre!("Unknown arg: {a}")),
        }
    }
    Ok(())
}
