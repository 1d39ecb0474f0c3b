use clap::Parser;
use rsvp::{
    cli::commands::{
        calendar::CalendarCommand, contact::ContactCommand, form::FormCommand,
        map::MapCommand, submit::SubmitCommand, CommandHandler,
    },
    cli::{Cli, Commands},
    config::ConfigLoader,
    io::RsvpPaths,
    logging,
    response::Submission,
    Result,
};
use tracing::{debug, error};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!(error = %e, "command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command_or_default();
    let directive = cli.log_level.to_filter_directive();

    let paths = RsvpPaths::new().ok();

    // The wizard owns the terminal, so its logs go to a file
    let _guard = match &command {
        Commands::Form { .. } => {
            let log_dir = paths
                .as_ref()
                .map(|p| p.log_dir.clone())
                .unwrap_or_else(|| std::env::temp_dir().join("rsvp").join("logs"));
            logging::init_file(&log_dir, directive)
        }
        _ => {
            logging::init_stderr(directive);
            None
        }
    };

    let config = ConfigLoader::new(cli.config.clone(), paths.as_ref()).load(&cli.overrides())?;
    debug!(?config, "configuration loaded");

    let handler: Box<dyn CommandHandler> = match command {
        Commands::Form { .. } => Box::new(FormCommand::new(config)),
        Commands::Submit {
            name,
            companion,
            beverage,
            dietary,
        } => Box::new(SubmitCommand::new(
            config,
            Submission {
                name,
                companion,
                beverage,
                dietary,
            },
        )),
        Commands::Calendar { target } => Box::new(CalendarCommand::new(target, config)),
        Commands::Map { open } => Box::new(MapCommand::new(open)),
        Commands::Contact { open } => Box::new(ContactCommand::new(open)),
    };

    debug!(command = handler.name(), "dispatching");
    handler.execute().await
}
