use clap::{Parser, Subcommand};
use ferrous_resolver_application::ports::QueryExecutor;
use ferrous_resolver_application::Resolver;
use ferrous_resolver_domain::{CliOverrides, Config, DnsMessage, RecordType};
use ferrous_resolver_infrastructure::dns::{RetryExecutor, TransportExecutor};
use std::sync::Arc;
use tracing::debug;

mod bootstrap;

#[derive(Parser)]
#[command(name = "ferrous-resolver")]
#[command(version)]
#[command(about = "Ferrous Resolver - stub DNS resolver with CNAME chain following")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Nameserver (udp://ip:port, tcp://ip:port, ip:port or ip)
    #[arg(short = 'n', long, global = true)]
    nameserver: Option<String>,

    /// Query timeout in milliseconds
    #[arg(long, value_name = "MS", global = true)]
    timeout: Option<u64>,

    /// Retries after a transport failure
    #[arg(long, global = true)]
    retries: Option<u32>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a name to an IPv4 address, following CNAMEs
    Resolve {
        domain: String,

        /// Print every address instead of one picked at random
        #[arg(long)]
        all: bool,
    },

    /// Query any record type and print the raw answer
    Lookup {
        domain: String,

        #[arg(short = 't', long = "type", value_name = "TYPE", default_value = "ANY")]
        record_type: RecordType,
    },

    /// Reverse-resolve an IPv4 address through in-addr.arpa
    Reverse { ip: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        nameserver: cli.nameserver.clone(),
        query_timeout_ms: cli.timeout,
        retries: cli.retries,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    let resolver = build_resolver(&config)?;

    match cli.command {
        Command::Resolve { domain, all: false } => {
            let address = resolver.resolve(&domain).await?;
            println!("{}", address);
        }
        Command::Resolve { domain, all: true } => {
            for address in resolver.resolve_all(&domain).await? {
                println!("{}", address);
            }
        }
        Command::Lookup {
            domain,
            record_type,
        } => {
            let message = resolver.lookup(&domain, record_type).await?;
            print_message(&message);
        }
        Command::Reverse { ip } => {
            let message = resolver.reverse(&ip).await?;
            print_message(&message);
        }
    }

    Ok(())
}

fn build_resolver(config: &Config) -> anyhow::Result<Resolver> {
    let nameserver = config
        .resolver
        .nameserver()
        .map_err(|e| anyhow::anyhow!(e))?;

    let transport = Arc::new(TransportExecutor::new(config.resolver.query_timeout_ms));
    let executor: Arc<dyn QueryExecutor> =
        Arc::new(RetryExecutor::new(transport, config.resolver.retries));

    let resolver =
        Resolver::new(nameserver, executor).with_max_alias_depth(config.resolver.max_alias_depth);
    debug!(nameserver = %resolver.nameserver(), "Resolver ready");

    Ok(resolver)
}

fn print_message(message: &DnsMessage) {
    if message.answers.is_empty() {
        eprintln!(
            ";; {} with no answers ({} authority records)",
            message.response_code,
            message.authority.len()
        );
        return;
    }

    for record in &message.answers {
        println!("{}", record);
    }
}
