use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use solana_balance_viewer::{
    BalanceFetcher, Config, ConsoleRenderer, HttpIconProbe, IconProbe, ViewController,
};

fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    let config = Config::parse();

    // Initialize logging; stdout is reserved for the view
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_level(true)
        .with_target(false)
        .with_max_level(config.log_level)
        .with_file(true)
        .with_line_number(true)
        .init();

    tokio::runtime::Runtime::new()?.block_on(run(config))
}

async fn run(config: Config) -> anyhow::Result<ExitCode> {
    info!("Helius URL: {}", config.helius_url);
    info!("CoinGecko URL: {}", config.coingecko_url);

    let fetcher = BalanceFetcher::from_config(&config);
    let icon_probe: Option<Arc<dyn IconProbe>> = if config.probe_icons {
        Some(Arc::new(HttpIconProbe::default()))
    } else {
        None
    };

    let (controller, view_task) =
        ViewController::new(fetcher, Arc::new(ConsoleRenderer::new()), icon_probe);

    if let Some(address) = config.address {
        controller.trigger(address).await?;
        controller.shutdown();

        let state = view_task.await?;
        return Ok(if state.error().is_some() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        });
    }

    eprintln!("Enter a Solana address and press Enter to fetch balances (Ctrl+D to quit).");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut pending: Vec<JoinHandle<()>> = Vec::new();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line? {
                    Some(line) => {
                        pending.retain(|handle| !handle.is_finished());
                        pending.push(controller.trigger(line.trim()));
                    }
                    None => break,
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted, dropping {} in-flight fetches", pending.len());
                pending.iter().for_each(JoinHandle::abort);
                pending.clear();
                break;
            }
        }
    }

    for handle in pending {
        handle.await?;
    }
    controller.shutdown();
    view_task.await?;

    debug!("Shutting down...");
    Ok(ExitCode::SUCCESS)
}
