// Terminal shell for aggregated domain search.
//
// Builds one Google search restricted to every configured site and opens it
// in the default browser (or prints it with --print).

use anyhow::{Context, Result};
use clap::Parser;
use kodegen_tools_domain_search::utils::INTERACTIVE_PROMPT;
use kodegen_tools_domain_search::{
    Key, Navigator, OutputMode, PrintNavigator, SearchConfig, SearchShell, SystemBrowser,
    decode_search_url,
};
use std::io::{BufRead, IsTerminal, Write};
use tracing::debug;

#[derive(Debug, Parser)]
#[command(
    name = "kodegen-domain-search",
    version,
    about = "Search a curated set of sites with a single Google query"
)]
struct Cli {
    /// Search query; words are joined with spaces. Omit for interactive mode.
    query: Vec<String>,

    /// Print the URL instead of opening a browser
    #[arg(long)]
    print: bool,

    /// Restrict to this site instead of the built-in list (repeatable)
    #[arg(long = "domain", value_name = "DOMAIN")]
    domains: Vec<String>,

    /// List the sites that will be searched and exit
    #[arg(long)]
    list_domains: bool,

    /// With --list-domains, dump the resolved configuration as JSON
    #[arg(long, requires = "list_domains")]
    json: bool,

    /// Decode a URL produced by this tool back into its query and exit
    #[arg(long, value_name = "URL", conflicts_with_all = ["query", "list_domains"])]
    explain: Option<String>,
}

fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if let Some(url) = cli.explain.as_deref() {
        let decoded = decode_search_url(url).context("Failed to decode search URL")?;
        println!("{}", decoded.query);
        return Ok(());
    }

    let output = if cli.print {
        OutputMode::Print
    } else {
        OutputMode::Browser
    };
    let config = SearchConfig::builder()
        .domains(cli.domains)
        .output(output)
        .build()?;

    if cli.list_domains {
        if cli.json {
            let json = serde_json::to_string_pretty(&config)
                .context("Failed to serialize configuration")?;
            println!("{json}");
        } else {
            for domain in config.registry() {
                println!("{domain}");
            }
        }
        return Ok(());
    }

    debug!("Searching across: {}", config.registry().summary());

    let navigator: Box<dyn Navigator> = match config.output() {
        OutputMode::Browser => Box::new(SystemBrowser),
        OutputMode::Print => Box::new(PrintNavigator::stdout()),
    };
    let mut shell = SearchShell::new(config.registry().clone(), navigator);

    if cli.query.is_empty() {
        run_interactive(&mut shell)
    } else {
        shell.set_query(cli.query.join(" "));
        shell.submit()?;
        Ok(())
    }
}

/// Read one query per line; each line ends with an Enter trigger. EOF exits.
fn run_interactive<N: Navigator>(shell: &mut SearchShell<N>) -> Result<()> {
    let stdin = std::io::stdin();
    let prompt = stdin.is_terminal();

    if prompt {
        eprintln!("Searching: {}", shell.registry().summary());
    }

    let mut lines = stdin.lock().lines();
    loop {
        if prompt {
            eprint!("{INTERACTIVE_PROMPT}");
            std::io::stderr().flush().context("Failed to flush prompt")?;
        }

        let Some(line) = lines.next() else {
            return Ok(());
        };
        shell.set_query(line.context("Failed to read query from stdin")?);
        shell.handle_key(Key::Enter)?;
    }
}
