use clap::Parser;
use websnip::config::cli::Command;
use websnip::utils::logger;
use websnip::{CliConfig, HttpFetcher, WebModule};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let endpoints = match config.endpoints() {
        Ok(endpoints) => endpoints,
        Err(e) => {
            tracing::error!("Endpoint configuration invalid: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    };

    let module = WebModule::new(HttpFetcher::new(), endpoints);

    let result = match &config.command {
        Command::Quote => module.daily_quote().await,
        Command::Picture {
            size,
            query,
            include_size,
        } => {
            module
                .random_picture(*size, query.as_deref(), *include_size)
                .await
        }
        Command::Poetry => module.today_poetry().await,
        Command::Lunar => module.lunar_date().await,
        Command::Weather { city, params } => module.weather(city, params).await,
        Command::Hitokoto { .. } => {
            let options = config
                .command
                .hitokoto_options()
                .unwrap_or_default();
            module.hitokoto(&options).await
        }
    };

    match result {
        Ok(snippet) => {
            println!("{}", snippet);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Template function failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
