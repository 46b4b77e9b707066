use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "phasedeck")]
#[command(about = "Track project stages, budgets, and discussions")]
struct Cli {
    /// Project to open
    #[arg(value_name = "PROJECT_ID")]
    project_id: i64,

    /// Base URL of the portal REST API
    #[arg(long, default_value = "http://localhost:3000/v4")]
    api_url: String,

    /// Deep link applied on startup, e.g. "#phase-42-posts"
    #[arg(long, value_name = "FRAGMENT")]
    fragment: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let default_filter = if args.verbose { "phasedeck=debug" } else { "phasedeck=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    #[cfg(feature = "gui")]
    {
        let flags = phasedeck::gui::Flags {
            api_url: args.api_url,
            project_id: args.project_id,
            fragment: args.fragment,
        };
        phasedeck::gui::run(flags).map_err(|e| anyhow::anyhow!("gui failed: {e}"))?;
        Ok(())
    }

    #[cfg(not(feature = "gui"))]
    {
        let _ = (&args.api_url, &args.fragment, args.project_id);
        anyhow::bail!("phasedeck was built without the gui feature")
    }
}
