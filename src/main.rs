use std::process::ExitCode;

use anyhow::{Context, Result};
use log::debug;
use mstree::config::MstConfig;
use mstree::driver::Driver;
use mstree::options::Options;

fn main() -> ExitCode {
    if std::env::var("MST_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("MST_LOG")
            .write_style("MST_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(clap_err) = err.downcast_ref::<clap::Error>() {
                clap_err.exit();
            }
            log::error!("{:?}", err);
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = std::env::args_os()
        .skip(1)
        .enumerate()
        .map(|(i, arg)| {
            arg.into_string().map_err(|arg| {
                anyhow::anyhow!("Argument {} is not valid Unicode: {:?}", i + 1, arg)
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let options = if args.is_empty() {
        Options::parse_from_str(&std::env::var("MST_FLAGS").unwrap_or_default())?
    } else {
        Options::parse_from_args(&args)?
    };
    debug!("MST options: {:?}", options);

    let config = MstConfig::load_from_file(&options.config)?.merge_options(&options);
    debug!("MST config: {:?}", config);

    let stdout = std::io::stdout();
    Driver::new(config)
        .run(&mut stdout.lock())
        .context("MST run failed")?;
    Ok(())
}
