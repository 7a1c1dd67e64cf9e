use lib::tt_html::models;
use lib::tt_html::run_tool::run;
use lib::tt_html::schedule_getter::HttpGetter;

use std::process::ExitCode;

use clap::Parser;
use figment::{
    providers::{Env, Format, Json},
    Figment,
};
use log::{error, info};
use models::{Args, Config};

#[tokio::main]
async fn main() -> ExitCode {
    /* Setup logging, stdout is reserved for the result */
    env_logger::builder()
        .target(env_logger::Target::Stderr)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    /* Get all the required resources */
    let args = Args::parse();
    let config: Config = match Figment::new()
        .merge(Json::file(&args.config_json_path))
        .merge(Env::prefixed("TT_"))
        .extract()
    {
        Ok(config) => config,
        Err(err) => {
            error!(
                "Cannot read config from {}: {}",
                args.config_json_path.display(),
                err
            );
            return ExitCode::FAILURE;
        }
    };
    info!("Read config from {}", args.config_json_path.display());
    let schedule_getter = HttpGetter::new(config.clone());

    match run(&schedule_getter, &args, &config).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
