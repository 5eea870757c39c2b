use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use dotenvy::dotenv;

use yatrisetu_admin::domain::booking::Booking;
use yatrisetu_admin::domain::bus::Bus;
use yatrisetu_admin::domain::payment::Payment;
use yatrisetu_admin::domain::route::Route;
use yatrisetu_admin::domain::staff::StaffMember;
use yatrisetu_admin::domain::user::User;
use yatrisetu_admin::filters::booking::{BookingFilter, BookingFilterForm};
use yatrisetu_admin::filters::bus::{BusFilter, BusFilterForm};
use yatrisetu_admin::filters::payment::{PaymentFilter, PaymentFilterForm};
use yatrisetu_admin::filters::route::{RouteFilter, RouteFilterForm};
use yatrisetu_admin::filters::staff::{StaffFilter, StaffFilterForm};
use yatrisetu_admin::filters::user::{UserFilter, UserFilterForm};
use yatrisetu_admin::models::config::ConsoleConfig;
use yatrisetu_admin::services::ServiceResult;
use yatrisetu_admin::services::listing::{
    ListingOutput, ListingRequest, OutputFormat, show_listing,
};
use yatrisetu_admin::source::http::ConsoleClient;

#[derive(Parser, Debug)]
#[command(name = "yatrisetu-admin", version, about = "YatriSetu admin console")]
struct Cli {
    /// YAML settings file; `YATRISETU_*` variables override it.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true, default_value_t = 1)]
    page: usize,
    /// Overrides `page_size` from the settings.
    #[arg(long, global = true)]
    page_size: Option<usize>,
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Html,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Html => OutputFormat::Html,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    Bookings {
        #[arg(long, default_value = "")]
        status: String,
        /// Journey date, `YYYY-MM-DD`.
        #[arg(long, default_value = "")]
        date: String,
        #[arg(long, default_value = "")]
        search: String,
    },
    Buses {
        /// `active` or `inactive`.
        #[arg(long, default_value = "")]
        status: String,
        #[arg(long, default_value = "")]
        bus_type: String,
        #[arg(long, default_value = "")]
        search: String,
    },
    Routes {
        #[arg(long, default_value = "")]
        status: String,
        #[arg(long, default_value = "")]
        search: String,
    },
    Payments {
        #[arg(long, default_value = "")]
        status: String,
        #[arg(long, default_value = "")]
        method: String,
        #[arg(long, default_value = "")]
        search: String,
    },
    Users {
        #[arg(long, default_value = "")]
        role: String,
        #[arg(long, default_value = "")]
        status: String,
        #[arg(long, default_value = "")]
        search: String,
    },
    Staff {
        /// `drivers`, `conductors` or `all`.
        #[arg(long, default_value = "drivers")]
        tab: String,
        #[arg(long, default_value = "all")]
        status: String,
        #[arg(long, default_value = "")]
        shift: String,
    },
}

async fn run(
    command: Command,
    client: &ConsoleClient,
    request: ListingRequest,
) -> ServiceResult<ListingOutput> {
    match command {
        Command::Bookings {
            status,
            date,
            search,
        } => {
            let filter = BookingFilter::try_from(BookingFilterForm {
                status,
                date,
                search,
            })?;
            show_listing::<Booking, _>(client, filter, request).await
        }
        Command::Buses {
            status,
            bus_type,
            search,
        } => {
            let filter = BusFilter::try_from(BusFilterForm {
                status,
                bus_type,
                search,
            })?;
            show_listing::<Bus, _>(client, filter, request).await
        }
        Command::Routes { status, search } => {
            let filter = RouteFilter::try_from(RouteFilterForm { status, search })?;
            show_listing::<Route, _>(client, filter, request).await
        }
        Command::Payments {
            status,
            method,
            search,
        } => {
            let filter = PaymentFilter::try_from(PaymentFilterForm {
                status,
                method,
                search,
            })?;
            show_listing::<Payment, _>(client, filter, request).await
        }
        Command::Users {
            role,
            status,
            search,
        } => {
            let filter = UserFilter::try_from(UserFilterForm {
                role,
                status,
                search,
            })?;
            show_listing::<User, _>(client, filter, request).await
        }
        Command::Staff { tab, status, shift } => {
            let filter = StaffFilter::try_from(StaffFilterForm { tab, status, shift })?;
            show_listing::<StaffMember, _>(client, filter, request).await
        }
    }
}

fn print_output(output: &ListingOutput) {
    if !output.stats.is_empty() {
        let cards: Vec<String> = output
            .stats
            .iter()
            .map(|card| format!("{}: {}", card.label, card.value))
            .collect();
        println!("{}", cards.join(" | "));
        println!();
    }
    print!("{}", output.body);
}

#[tokio::main]
async fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));

    let cli = Cli::parse();

    let config = match ConsoleConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Error loading console config: {err}");
            std::process::exit(1);
        }
    };

    let client = match ConsoleClient::from_config(&config) {
        Ok(client) => client,
        Err(err) => {
            log::error!("Error creating console client: {err}");
            std::process::exit(1);
        }
    };

    let request = ListingRequest {
        page: cli.page,
        page_size: cli.page_size.unwrap_or(config.page_size),
        format: cli.format.into(),
    };

    match run(cli.command, &client, request).await {
        Ok(output) => print_output(&output),
        Err(err) => {
            log::error!("Listing failed: {err}");
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
