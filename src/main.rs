use clap::Parser;
use std::io::Write;
use vendorverse::utils::{logger, validation::Validate};
use vendorverse::{
    AcceptAllSink, CatalogBackend, CliConfig, FinalizeSink, HttpFinalizeClient,
    HttpSuggestionClient, RoundController, SuggestionBackend,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting vendorverse CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let settings = match config.resolve_settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration loading failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = settings.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let client_interest = match &config.client_interest {
        Some(text) => text.clone(),
        None => prompt("Client interests> ")?,
    };
    let vendor_capability = match &config.vendor_capability {
        Some(text) => text.clone(),
        None => prompt("Vendor capabilities> ")?,
    };

    let committed = if config.offline {
        tracing::info!("Running against the built-in catalog");
        let controller =
            RoundController::new(CatalogBackend::with_default_catalog(), AcceptAllSink);
        run_round(&controller, &client_interest, &vendor_capability).await?
    } else {
        let client = reqwest::Client::new();
        let controller = RoundController::new(
            HttpSuggestionClient::new(client.clone(), &settings),
            HttpFinalizeClient::new(client, &settings),
        );
        run_round(&controller, &client_interest, &vendor_capability).await?
    };

    if !committed {
        std::process::exit(2);
    }

    Ok(())
}

/// Drives one full round: submit, present, select, finalize. Returns
/// whether the round ended in a committed selection.
async fn run_round<S: SuggestionBackend, F: FinalizeSink>(
    controller: &RoundController<S, F>,
    client_interest: &str,
    vendor_capability: &str,
) -> anyhow::Result<bool> {
    if let Err(e) = controller.submit(client_interest, vendor_capability).await {
        eprintln!("❌ {}", e);
        return Ok(false);
    }

    let candidates = match controller.candidates() {
        Some(candidates) => candidates,
        None => anyhow::bail!("no candidates after a successful submission"),
    };

    println!("\nSuggested services:");
    for (index, service) in candidates.services().iter().enumerate() {
        println!("  {}. {}", index + 1, service.title);
        println!("     {}", service.description);
    }

    let line = prompt("\nSelect services (comma-separated numbers, empty to cancel)> ")?;
    if line.trim().is_empty() {
        controller.cancel()?;
        println!("No services finalized.");
        return Ok(false);
    }

    for token in line.split(',') {
        let token = token.trim();
        match token.parse::<usize>() {
            Ok(number) if number >= 1 && number <= candidates.candidate_count() => {
                let title = &candidates.services()[number - 1].title;
                controller.toggle(title, true);
            }
            _ => eprintln!("Ignoring invalid selection '{}'", token),
        }
    }

    if controller.selected_titles().is_empty() {
        controller.cancel()?;
        println!("No services finalized.");
        return Ok(false);
    }

    let outcome = controller.finalize().await?;
    if outcome.success {
        println!("✅ {}", outcome.message);
        println!(
            "Committed at {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        );
        Ok(true)
    } else {
        eprintln!("❌ {}", outcome.message);
        eprintln!("Your selection has been kept; run again to retry.");
        Ok(false)
    }
}

fn prompt(label: &str) -> std::io::Result<String> {
    print!("{}", label);
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
