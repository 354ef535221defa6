use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use thiserror::Error;
use tracing::{debug, error};

use invodash_frontend::settings::Settings;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Initialization error")]
    Initialization,
    #[error("Tracing error")]
    Tracing(#[from] tracing::subscriber::SetGlobalDefaultError),
}

#[tokio::main]
async fn main() {
    let logpath = match get_logging_path() {
        Ok(it) => it,
        Err(_) => return,
    };

    let logfile = tracing_appender::rolling::daily(logpath, "log");
    tracing_subscriber::fmt()
        .compact()
        .with_writer(logfile)
        .init();

    debug!("starting application");

    let mut settings = Settings::default();
    map_args_to_settings(&cli().get_matches(), &mut settings);

    match invodash_frontend::run(settings).await {
        Ok(()) => {
            debug!("closing application");
        }
        Err(err) => {
            error!("closing application with error: {:?}", err);
        }
    }
}

fn cli() -> Command {
    Command::new("invodash")
        .about("invodash - invoice dashboard and webhook upload in the terminal")
        .args([
            // NOTE: arguments
            Arg::new("path")
                .action(ArgAction::Set)
                .value_parser(value_parser!(PathBuf))
                .help("invoice file to preselect for upload on startup"),
            // NOTE: options
            Arg::new("endpoint")
                .long("endpoint")
                .action(ArgAction::Set)
                .help("webhook endpoint receiving uploaded invoices"),
            Arg::new("upload")
                .long("upload")
                .action(ArgAction::SetTrue)
                .default_value("false")
                .help("open the upload page instead of the dashboard on startup"),
        ])
}

fn map_args_to_settings(args: &ArgMatches, settings: &mut Settings) {
    settings.startup_file = args.get_one("path").cloned();
    settings.start_on_upload = args.get_flag("upload");

    if let Some(endpoint) = args.get_one::<String>("endpoint") {
        settings.endpoint = endpoint.to_owned();
    }
}

fn get_logging_path() -> Result<String, Error> {
    let cache_dir = match dirs::cache_dir() {
        Some(cache_dir) => match cache_dir.to_str() {
            Some(cache_dir_string) => cache_dir_string.to_string(),
            None => return Err(Error::Initialization),
        },
        None => return Err(Error::Initialization),
    };

    Ok(format!("{}{}", cache_dir, "/invodash/logs"))
}
