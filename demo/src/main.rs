//! MedMap Naga — Demo CLI
//!
//! Exercises every flow of the resource engine against the synthetic data
//! layer: free-text search, the chat assistant's quick questions, the SOS
//! emergency broadcast, and the admin-side stock edit, low-stock, and
//! analytics paths.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- search "o+ blood"
//!   cargo run -p demo -- search --no-location "which pharmacy has paracetamol"
//!   cargo run -p demo -- sos --category blood --resource O+ --contact "+63 917 000 1111"
//!   cargo run -p demo -- update-stock --record 1-2 --stock 0
//!   cargo run -p demo -- low-stock
//!   cargo run -p demo -- analytics --email staff@naga.gov.ph

use chrono::{Duration, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use medmap_admin::{
    analytics_report, apply_stock_update, low_stock_report, require_admin, RoleAccessPolicy,
    StaffDirectory, StockPolicy,
};
use medmap_alerts::{seal_request, InMemoryAlertLog};
use medmap_assist::{ChatSession, FAQ_ENTRIES, RESPONSE_DELAY_MS};
use medmap_contracts::{
    emergency::EmergencyRequest,
    error::{MedMapError, MedMapResult},
    geo::{GeoPoint, NAGA_CITY_CENTROID},
    resource::ResourceCategory,
};
use medmap_core::{nearby_facilities, search, traits::AlertLog, traits::SnapshotProvider, MAX_ALERTED};
use medmap_data::{catalog, SyntheticAnalytics, SyntheticAvailability};

// ── CLI definition ────────────────────────────────────────────────────────────

/// MedMap Naga — medical resource availability demo.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "MedMap Naga resource engine demo",
    long_about = "Runs the MedMap Naga flows over synthetic data: search and chat,\n\
                  SOS emergency broadcast, and the admin stock/analytics paths."
)]
struct Cli {
    /// Seed for the synthetic data generators (omit for OS entropy).
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run every flow in sequence.
    RunAll,
    /// Search availability for a free-text query.
    Search {
        /// The query text, e.g. "o+ blood" or "which pharmacy has paracetamol".
        query: String,
        /// Pretend geolocation was denied (ranking falls back to name order).
        #[arg(long)]
        no_location: bool,
    },
    /// Run the assistant's six quick questions through a chat session.
    ChatFaq,
    /// Submit an SOS emergency request and show the broadcast.
    Sos {
        #[arg(long, value_enum)]
        category: CategoryArg,
        /// The specific resource needed, e.g. "O+" or "Oxygen Tank".
        #[arg(long)]
        resource: String,
        #[arg(long)]
        contact: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Edit one record's stock level (admin only).
    UpdateStock {
        /// Record id, e.g. "1-2" or "2-blood-1".
        #[arg(long)]
        record: String,
        #[arg(long)]
        stock: u32,
        #[arg(long, default_value = "admin@naga.gov.ph")]
        email: String,
    },
    /// Show records at or below their low-stock threshold.
    LowStock,
    /// Show the aggregated analytics report (admin only).
    Analytics {
        #[arg(long, default_value = "admin@naga.gov.ph")]
        email: String,
    },
}

/// Resource category as a CLI argument.
#[derive(Clone, Copy, ValueEnum)]
enum CategoryArg {
    Medicines,
    Blood,
    Beds,
    Equipment,
}

impl From<CategoryArg> for ResourceCategory {
    fn from(value: CategoryArg) -> Self {
        match value {
            CategoryArg::Medicines => ResourceCategory::Medicines,
            CategoryArg::Blood => ResourceCategory::Blood,
            CategoryArg::Beds => ResourceCategory::Beds,
            CategoryArg::Equipment => ResourceCategory::Equipment,
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging. Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    print_banner();

    let mut generator = match cli.seed {
        Some(seed) => SyntheticAvailability::from_seed(seed),
        None => SyntheticAvailability::from_entropy(),
    };

    let result = match cli.command {
        Command::RunAll => run_all(&mut generator, cli.seed),
        Command::Search { query, no_location } => run_search(&mut generator, &query, no_location),
        Command::ChatFaq => run_chat_faq(&mut generator),
        Command::Sos {
            category,
            resource,
            contact,
            description,
        } => run_sos(
            &mut generator,
            EmergencyRequest {
                category: category.into(),
                resource,
                description,
                contact_number: contact,
            },
        ),
        Command::UpdateStock { record, stock, email } => {
            run_update_stock(&mut generator, &record, stock, &email)
        }
        Command::LowStock => run_low_stock(&mut generator),
        Command::Analytics { email } => run_analytics(&mut generator, cli.seed, &email),
    };

    match result {
        Ok(()) => println!("All selected flows completed successfully."),
        Err(e) => {
            eprintln!("Demo error: {}", e);
            std::process::exit(1);
        }
    }
}

// ── Flows ─────────────────────────────────────────────────────────────────────

fn run_all(generator: &mut SyntheticAvailability, seed: Option<u64>) -> MedMapResult<()> {
    run_search(generator, "o+ blood", false)?;
    run_chat_faq(generator)?;
    run_sos(
        generator,
        EmergencyRequest {
            category: ResourceCategory::Blood,
            resource: "O+".to_string(),
            description: "demo emergency".to_string(),
            contact_number: "+63 917 000 1111".to_string(),
        },
    )?;
    run_update_stock(generator, "1-2", 0, "admin@naga.gov.ph")?;
    run_low_stock(generator)?;
    run_analytics(generator, seed, "admin@naga.gov.ph")?;
    Ok(())
}

fn run_search(
    generator: &mut SyntheticAvailability,
    query: &str,
    no_location: bool,
) -> MedMapResult<()> {
    let facilities = catalog::facilities();
    let snapshot = generator.snapshot(Utc::now());
    let user_location: Option<GeoPoint> = if no_location {
        None
    } else {
        Some(NAGA_CITY_CENTROID)
    };

    println!("Search: {query:?}");
    println!("---------------------------------");
    let outcome = search(query, &snapshot, &facilities, user_location);
    println!("{}", outcome.message);
    println!();
    Ok(())
}

fn run_chat_faq(generator: &mut SyntheticAvailability) -> MedMapResult<()> {
    let facilities = catalog::facilities();
    let snapshot = generator.snapshot(Utc::now());
    let mut session = ChatSession::new();

    println!("Chat assistant quick questions");
    println!("---------------------------------");
    println!("{}", session.messages()[0].content);
    println!();

    for entry in FAQ_ENTRIES {
        let now = Utc::now();
        session.submit(
            entry.question,
            &snapshot,
            &facilities,
            Some(NAGA_CITY_CENTROID),
            now,
        )?;

        // The demo has no event loop; release the staged reply directly.
        let reply = session
            .poll(now + Duration::milliseconds(RESPONSE_DELAY_MS))
            .expect("staged reply is due");

        println!("> {}", entry.question);
        println!("{}", reply.content);
        println!();
    }
    Ok(())
}

fn run_sos(generator: &mut SyntheticAvailability, request: EmergencyRequest) -> MedMapResult<()> {
    let facilities = catalog::facilities();
    let snapshot = generator.snapshot(Utc::now());
    let location = NAGA_CITY_CENTROID;

    let nearby = nearby_facilities(
        &facilities,
        &snapshot,
        location,
        Some((request.category, request.resource.as_str())),
    );
    let alert = seal_request(&request, Some(location), nearby, Utc::now())?;

    let log = InMemoryAlertLog::new();
    log.append(&alert)?;

    println!("Emergency alert sent");
    println!("---------------------------------");
    println!("Reference: {}", &alert.reference[..12]);
    println!(
        "Nearby facilities to be alerted ({}):",
        alert.nearby.len().min(MAX_ALERTED)
    );
    for (index, nearby) in alert.nearby.iter().enumerate() {
        let marker = if nearby.has_resource {
            "has the resource"
        } else {
            "resource not on record"
        };
        println!(
            "  {}. {} - {:.1} km away ({marker})",
            index + 1,
            nearby.facility.name,
            nearby.distance_km
        );
    }
    println!("Alerts retained in log: {}", log.recent(10)?.len());
    println!();
    Ok(())
}

fn run_update_stock(
    generator: &mut SyntheticAvailability,
    record_id: &str,
    stock: u32,
    email: &str,
) -> MedMapResult<()> {
    let session = StaffDirectory.login(email).ok_or(MedMapError::AccessDenied {
        reason: format!("unknown account '{email}'"),
    })?;
    require_admin(&RoleAccessPolicy, &session)?;

    let snapshot = generator.snapshot(Utc::now());
    let policy = StockPolicy::default();
    let next = apply_stock_update(&snapshot, record_id, stock, &policy, Utc::now())?;

    let before = snapshot.iter().find(|r| r.id == record_id).expect("checked by update");
    let after = next.iter().find(|r| r.id == record_id).expect("present in published snapshot");

    println!("Stock update by {}", session.name);
    println!("---------------------------------");
    println!(
        "{} ({}): stock {} -> {}, status {:?} -> {:?}",
        after.resource_name, after.id, before.stock, after.stock, before.status, after.status
    );
    println!();
    Ok(())
}

fn run_low_stock(generator: &mut SyntheticAvailability) -> MedMapResult<()> {
    let facilities = catalog::facilities();
    let snapshot = generator.snapshot(Utc::now());
    let report = low_stock_report(&snapshot, &facilities, &StockPolicy::default());

    println!("Low-stock report ({} records)", report.len());
    println!("---------------------------------");
    for alert in report.iter().take(15) {
        println!(
            "  {} at {} - stock {} ({:?})",
            alert.record.resource_name, alert.facility.name, alert.record.stock, alert.record.status
        );
    }
    if report.len() > 15 {
        println!("  ... and {} more", report.len() - 15);
    }
    println!();
    Ok(())
}

fn run_analytics(
    generator: &mut SyntheticAvailability,
    seed: Option<u64>,
    email: &str,
) -> MedMapResult<()> {
    let session = StaffDirectory.login(email).ok_or(MedMapError::AccessDenied {
        reason: format!("unknown account '{email}'"),
    })?;

    let snapshot = generator.snapshot(Utc::now());
    let mut analytics = match seed {
        Some(seed) => SyntheticAnalytics::from_seed(seed),
        None => SyntheticAnalytics::from_entropy(),
    };
    let report = analytics_report(
        &session,
        &RoleAccessPolicy,
        &snapshot,
        analytics.series(Utc::now()),
    )?;

    println!("Analytics report");
    println!("---------------------------------");
    println!("Top searched resources:");
    for entry in report.series.search_frequency.iter().take(5) {
        println!("  {:>4}  {}", entry.searches, entry.resource);
    }
    println!("Stock summary by category:");
    for summary in &report.stock_summary {
        println!(
            "  {:<12} available {:>3}, low {:>3}, out of stock {:>3}",
            summary.category.label(),
            summary.available,
            summary.low,
            summary.out_of_stock
        );
    }
    println!();
    Ok(())
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("MedMap Naga — Resource Availability Engine");
    println!("Synthetic Data Demo");
    println!("==========================================");
    println!();
    println!("Search pipeline per query:");
    println!("  [1] Matcher scans the snapshot (substring / blood token / synonym)");
    println!("  [2] Only records with status 'available' survive");
    println!("  [3] Ranker orders by distance, falling back to facility name");
    println!("  [4] Top 5 results are formatted for display");
    println!();
}
