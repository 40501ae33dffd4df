//! Terminal host for the checkout flows.
//!
//! Runs a payment attempt or a redirect against a live dashboard. Notifications go
//! to stderr, navigations to stdout, and the payment popup is a prompt for the
//! reference the provider issued.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use url::Url;

use paystack_checkout::config::{load_config, CheckoutConfig};
use paystack_checkout::http::HttpInitiationClient;
use paystack_checkout::observability::{logging, metrics, MetricsAnalytics};
use paystack_checkout::ui::console::{ConsoleNavigator, ConsoleNotifier, ConsolePopup};
use paystack_checkout::ui::Host;
use paystack_checkout::{PaymentControl, PaymentFlow, PaymentOutcome, RedirectFlow};

#[derive(Parser)]
#[command(name = "paystack-checkout")]
#[command(about = "Drive dashboard checkout flows from the terminal", long_about = None)]
struct Cli {
    /// TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Provider public key (overrides the config file).
    #[arg(short, long, env = "PAYSTACK_PUBLIC_KEY")]
    key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initiate a payment and complete it in the popup
    Pay {
        #[arg(long)]
        email: String,
        /// Display amount in major units
        #[arg(long)]
        amount: Option<String>,
        /// Initiation endpoint (absolute or relative to the base URL)
        #[arg(long)]
        url: Option<String>,
    },
    /// Extend a subscription by a number of months
    Extend {
        #[arg(long)]
        subscription: u64,
        #[arg(long)]
        months: Option<String>,
    },
    /// Pay an outstanding invoice
    Invoice {
        #[arg(long)]
        id: u64,
    },
    /// Open the verification page for a completed payment
    Verify {
        #[arg(long)]
        reference: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => CheckoutConfig::default(),
    };
    if let Some(key) = cli.key.clone() {
        config.provider.public_key = key;
    }

    logging::init_logging(&config.observability);
    let metrics_handle = metrics::init_metrics(&config.observability);

    tracing::info!(
        base_url = %config.endpoints.base_url,
        currency = %config.provider.currency,
        request_timeout_secs = ?config.http.request_timeout_secs,
        "Configuration loaded"
    );

    let result = run(cli.command, &config).await;

    if let Some(handle) = metrics_handle {
        tracing::debug!(snapshot = %handle.render(), "Metrics at exit");
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Checkout failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(
    command: Commands,
    config: &CheckoutConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let notifier = Arc::new(ConsoleNotifier);
    let navigator = Arc::new(ConsoleNavigator);

    match command {
        Commands::Pay { email, amount, url } => {
            if config.provider.public_key.trim().is_empty() {
                return Err(
                    "a provider public key is required (--key or provider.public_key)".into(),
                );
            }

            let host = Host {
                notifier,
                popup: Arc::new(ConsolePopup::stdin()),
                navigator,
                analytics: Arc::new(MetricsAnalytics),
            };
            let api = Arc::new(HttpInitiationClient::new(config)?);
            let flow = PaymentFlow::new(&config.provider, api, host);

            let control = PaymentControl {
                email,
                amount,
                initiate_url: url.unwrap_or_else(|| config.endpoints.initiate_path.clone()),
            };

            match flow.handle_click(&control).await? {
                PaymentOutcome::Completed { reference } => {
                    tracing::info!(reference = %reference, "Payment completed");
                }
                PaymentOutcome::Cancelled => tracing::info!("Payment cancelled"),
                PaymentOutcome::Busy => tracing::warn!("Payment already in progress"),
            }
        }
        Commands::Extend { subscription, months } => {
            redirect_flow(config, notifier, navigator)?
                .extend_subscription(subscription, months.as_deref())?;
        }
        Commands::Invoice { id } => {
            redirect_flow(config, notifier, navigator)?.pay_invoice(id)?;
        }
        Commands::Verify { reference } => {
            redirect_flow(config, notifier, navigator)?.verify_payment(&reference)?;
        }
    }

    Ok(())
}

fn redirect_flow(
    config: &CheckoutConfig,
    notifier: Arc<ConsoleNotifier>,
    navigator: Arc<ConsoleNavigator>,
) -> Result<RedirectFlow, url::ParseError> {
    let base_url = Url::parse(&config.endpoints.base_url)?;
    Ok(RedirectFlow::new(base_url, notifier, navigator))
}
