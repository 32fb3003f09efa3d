use clap::Parser;

mod cli;
mod commands;
mod context;
mod output;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("stk error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    let config = stock_config::StockConfig::load_with_dotenv()?;
    let mut ctx = context::AppContext::init(config)?;

    let result = commands::dispatch::dispatch(cli.command, &mut ctx, &flags).await;

    // Reactive half of token-expiry handling: any 401 that reached the
    // surface while a token was set ends the session, exactly once.
    if let Err(error) = result {
        if ctx.session.has_token() && is_unauthorized(&error) {
            ctx.logout();
            anyhow::bail!("session expired — stored credentials cleared; run `stk auth login`");
        }
        return Err(error);
    }
    Ok(())
}

fn is_unauthorized(error: &anyhow::Error) -> bool {
    error.chain().any(|cause| {
        cause
            .downcast_ref::<stock_client::ApiError>()
            .is_some_and(stock_client::ApiError::is_unauthorized)
    })
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("STOCKPILE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
