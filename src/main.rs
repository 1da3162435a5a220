use actix_web::{web, App, HttpServer};
use clap::Parser;
use phrase_search::cli::commands::{Cli, Commands};
use phrase_search::config::{self, Settings};
use phrase_search::web::server;
use phrase_search::PhraseSearch;

#[actix_web::main]
async fn main() {
    if let Err(e) = config::load_env_file(None) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(e) = run_command(cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;

    match cmd {
        Commands::Serve { bind, in_memory } => {
            let app = if in_memory {
                tracing::warn!("using in-memory store, phrases are lost on exit");
                PhraseSearch::in_memory(&settings)
            } else {
                PhraseSearch::connect(&settings).await?
            };
            let app = web::Data::new(app);

            tracing::info!(%bind, "listening");
            HttpServer::new(move || App::new().app_data(app.clone()).configure(server::config))
                .bind(bind.as_str())?
                .run()
                .await?;
        }
        Commands::Add { text } => {
            let app = PhraseSearch::connect(&settings).await?;
            let phrase = app.add_phrase(&text).await?;
            println!("{}", serde_json::to_string_pretty(&phrase)?);
        }
        Commands::Search { text, limit } => {
            let app = PhraseSearch::connect(&settings).await?;
            let outcome = app.search(&text, limit).await?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
    }
    Ok(())
}
