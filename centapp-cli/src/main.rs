//! CentApp CLI
//!
//! Command-line interface for the CentApp payment API.

use std::time::Duration;

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use centapp_client::{
    ApiResponse, CentApp, CreateBill, Currency, DEFAULT_BASE_URL, LinkType, RegularPayout,
    SearchFilter,
};

#[derive(Parser)]
#[command(name = "centapp")]
#[command(author, version, about = "CentApp payment API CLI client", long_about = None)]
struct Cli {
    /// Bearer token issued in the CentApp merchant dashboard
    #[arg(long, env = "CENTAPP_TOKEN", hide_env_values = true)]
    token: String,

    /// Base URL of the CentApp API
    #[arg(long, env = "CENTAPP_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "CENTAPP_TIMEOUT_SECS")]
    timeout: Option<u64>,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bill operations
    Bill {
        #[command(subcommand)]
        action: BillCommands,
    },
    /// Payment operations
    Payment {
        #[command(subcommand)]
        action: PaymentCommands,
    },
    /// Merchant operations
    Merchant {
        #[command(subcommand)]
        action: MerchantCommands,
    },
    /// Payout operations
    Payout {
        #[command(subcommand)]
        action: PayoutCommands,
    },
}

#[derive(Args)]
struct SearchArgs {
    /// Start of the period (YYYY-MM-DD)
    #[arg(long)]
    start_date: Option<String>,
    /// End of the period (YYYY-MM-DD)
    #[arg(long)]
    finish_date: Option<String>,
}

#[derive(Subcommand)]
enum BillCommands {
    /// Create a new bill
    Create {
        amount: f64,
        shop_id: String,
        #[arg(long)]
        order_id: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Link type (normal, multi)
        #[arg(long, default_value = "normal")]
        link_type: LinkType,
        /// Currency (RUB, USD, EUR)
        #[arg(long, default_value = "RUB")]
        currency: Currency,
        #[arg(long)]
        custom: Option<String>,
        /// Whether the payer covers the commission
        #[arg(long, default_value_t = true, action = ArgAction::Set)]
        payer_pays_commission: bool,
        #[arg(long)]
        name: Option<String>,
    },
    /// Enable or disable a bill
    ToggleActivity {
        id: String,
        #[arg(long, action = ArgAction::Set)]
        active: bool,
    },
    /// List payments made against a bill
    Payments { id: String },
    /// Search bills
    Search {
        #[command(flatten)]
        range: SearchArgs,
        #[arg(long)]
        shop_id: Option<String>,
    },
    /// Get bill status
    Status { id: String },
}

#[derive(Subcommand)]
enum PaymentCommands {
    /// Search payments
    Search {
        #[command(flatten)]
        range: SearchArgs,
        #[arg(long)]
        shop_id: Option<String>,
    },
    /// Get payment status
    Status { id: String },
}

#[derive(Subcommand)]
enum MerchantCommands {
    /// Show the merchant balance
    Balance,
}

#[derive(Subcommand)]
enum PayoutCommands {
    /// Pay out to a registered payout account
    PersonalCreate {
        amount: f64,
        payout_account_id: String,
    },
    /// Pay out to a bank card
    RegularCreate {
        amount: f64,
        /// Currency (RUB, USD, EUR)
        #[arg(long, default_value = "RUB")]
        currency: Currency,
        /// Card number
        #[arg(long)]
        card: String,
        #[arg(long)]
        card_holder: String,
    },
    /// Search payouts
    Search {
        #[command(flatten)]
        range: SearchArgs,
    },
    /// Get payout status
    Status { id: String },
}

fn search_filter(range: SearchArgs, shop_id: Option<String>) -> SearchFilter {
    SearchFilter {
        start_date: range.start_date,
        finish_date: range.finish_date,
        shop_id,
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into());
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn build_client(cli: &Cli) -> CentApp {
    let app = CentApp::new(&cli.token).with_base_url(&cli.base_url);
    match cli.timeout {
        Some(secs) => app.with_timeout(Duration::from_secs(secs)),
        None => app,
    }
}

async fn run(app: &CentApp, command: Commands) -> Result<ApiResponse> {
    let resp = match command {
        Commands::Bill { action } => match action {
            BillCommands::Create {
                amount,
                shop_id,
                order_id,
                description,
                link_type,
                currency,
                custom,
                payer_pays_commission,
                name,
            } => {
                let req = CreateBill {
                    amount,
                    shop_id,
                    order_id,
                    description,
                    link_type,
                    currency_in: currency,
                    custom,
                    payer_pays_commission,
                    name,
                };
                app.bill().create(&req).await?
            }
            BillCommands::ToggleActivity { id, active } => {
                app.bill().toggle_activity(&id, active).await?
            }
            BillCommands::Payments { id } => app.bill().payments(&id).await?,
            BillCommands::Search { range, shop_id } => {
                app.bill().search(&search_filter(range, shop_id)).await?
            }
            BillCommands::Status { id } => app.bill().status(&id).await?,
        },

        Commands::Payment { action } => match action {
            PaymentCommands::Search { range, shop_id } => {
                app.payment().search(&search_filter(range, shop_id)).await?
            }
            PaymentCommands::Status { id } => app.payment().status(&id).await?,
        },

        Commands::Merchant { action } => match action {
            MerchantCommands::Balance => app.merchant().balance().await?,
        },

        Commands::Payout { action } => match action {
            PayoutCommands::PersonalCreate {
                amount,
                payout_account_id,
            } => {
                app.payout()
                    .personal_create(amount, &payout_account_id)
                    .await?
            }
            PayoutCommands::RegularCreate {
                amount,
                currency,
                card,
                card_holder,
            } => {
                let req = RegularPayout::new(amount, currency, card, card_holder);
                app.payout().regular_create(&req).await?
            }
            PayoutCommands::Search { range } => {
                app.payout().search(&search_filter(range, None)).await?
            }
            PayoutCommands::Status { id } => app.payout().status(&id).await?,
        },
    };
    Ok(resp)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let app = build_client(&cli);
    let resp = run(&app, cli.command).await?;

    println!("{}", serde_json::to_string_pretty(resp.body())?);
    if let ApiResponse::Failure { status, .. } = resp {
        eprintln!("✗ API returned HTTP {}", status);
        std::process::exit(1);
    }

    Ok(())
}
