use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use orgharvest::export::{to_csv, to_json};
use orgharvest::{
    build_contribution_table, build_repository_graph, build_repository_table, Config,
    GitHubClient, PageFailurePolicy,
};

#[derive(Parser, Debug)]
#[command(name = "orgharvest")]
#[command(version = "0.1.0")]
#[command(about = "Export a GitHub organization's repositories and contributors")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Organization to harvest (defaults to GITHUB_ORG)
    #[arg(long, global = true)]
    org: Option<String>,

    /// Output file (defaults to stdout)
    #[arg(short, long, global = true)]
    output: Option<String>,

    /// What to do when a page request fails (skip, abort)
    #[arg(long, global = true)]
    on_page_failure: Option<PageFailurePolicy>,

    /// Show a progress bar while fetching contributors
    #[arg(long, global = true)]
    progress: bool,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    /// Public repositories as CSV (name, description, url)
    Repositories,
    /// Per-repository contributor counts as CSV
    Contributions,
    /// Repository/contributor graph as JSON
    Graph,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never mix with the exported data
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("orgharvest=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    dotenvy::dotenv().ok();

    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(org) = args.org.clone() {
        config.org = org;
    }
    if let Some(policy) = args.on_page_failure {
        config.page_failure_policy = policy;
    }

    let api = GitHubClient::new(&config)?.with_progress(args.progress);

    tracing::info!("Exporting {:?} for organization: {}", args.command, config.org);
    let output = match args.command {
        Command::Repositories => to_csv(&build_repository_table(&api).await?),
        Command::Contributions => to_csv(&build_contribution_table(&api).await?),
        Command::Graph => {
            let mut json = to_json(&build_repository_graph(&api).await?)?;
            json.push('\n');
            json
        }
    };

    if let Some(ref path) = args.output {
        std::fs::write(path, &output)?;
        tracing::info!("Output written to: {}", path);
    } else {
        print!("{}", output);
    }

    Ok(())
}
