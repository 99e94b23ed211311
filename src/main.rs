use clap::Parser;
use growth_journal::cli::output::{format_prompt_list, format_strength_list, format_value_list};
use growth_journal::cli::{CatalogSection, Cli, Commands, Session};
use growth_journal::error::JournalError;
use growth_journal::infrastructure::{Config, EntityStore};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("growth_journal=warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), JournalError> {
    let config = Config::discover(cli.config.as_deref())?;
    let store = EntityStore::from_config(&config)?;

    match cli.command {
        Some(Commands::Catalog { section }) => {
            let show = |s: CatalogSection| section.map_or(true, |wanted| wanted == s);

            if show(CatalogSection::Values) {
                let values: Vec<_> = store.values().iter().collect();
                println!("Values\n{}", format_value_list(&values));
            }
            if show(CatalogSection::Strengths) {
                println!("Strengths\n{}", format_strength_list(store.strengths()));
            }
            if show(CatalogSection::Prompts) {
                println!("Prompts\n{}", format_prompt_list(&store.prompts(None)));
            }
            Ok(())
        }
        Some(Commands::Session) | None => {
            let mut session = Session::new(store);
            let stdin = io::stdin();
            session.run(stdin.lock(), &mut io::stdout(), &mut io::stderr())
        }
    }
}
