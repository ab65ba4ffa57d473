mod amenities;
mod catalog;
mod config;
mod error;
mod models;
mod pricing;
mod session;
mod sources;

use anyhow::Result;
use catalog::{availability_headline, Catalog};
use clap::{Parser, Subcommand};
use config::Config;
use models::{FilterCriteria, Listing};
use pricing::{parse_date_input, ReservationRequest};
use session::Session;
use std::path::PathBuf;
use error::BookingError;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "staybnb")]
#[command(about = "Browse short-stay listings and price a reservation")]
#[command(version)]
struct Cli {
    /// Listings JSON file (defaults to $STAYBNB_LISTINGS, then the built-in dataset)
    #[arg(long, global = true)]
    listings: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Sign in before running the command
    #[arg(long, global = true)]
    email: Option<String>,

    #[arg(long, global = true, default_value = "")]
    password: String,

    /// Create the account given by --email instead of signing in
    #[arg(long, global = true, requires = "email")]
    sign_up: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List listings matching the filters
    List {
        /// Keep listings in this location (repeatable)
        #[arg(short, long)]
        location: Vec<String>,

        /// Keep listings offering this amenity (repeatable, all must match)
        #[arg(short, long)]
        amenity: Vec<String>,

        #[arg(long, default_value = "")]
        check_in: String,

        #[arg(long, default_value = "")]
        check_out: String,
    },

    /// Show the details of one listing
    Show { id: String },

    /// Price a stay without reserving
    Quote {
        id: String,

        #[arg(long, default_value = "")]
        check_in: String,

        #[arg(long, default_value = "")]
        check_out: String,
    },

    /// Reserve a stay (acknowledgment only, nothing is booked)
    Reserve {
        id: String,

        #[arg(long, default_value = "")]
        check_in: String,

        #[arg(long, default_value = "")]
        check_out: String,

        #[arg(short, long, default_value_t = 1)]
        guests: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.listings.clone(), cli.json);
    debug!("Config: {}", serde_json::to_string(&config)?);

    let source = config.listing_source();
    info!("🏠 Staybnb - loading listings from {}", source.source_name());
    let catalog = Catalog::new(source.load().await?);
    if catalog.is_empty() {
        warn!("No listings loaded");
    } else {
        info!("Loaded {} listings", catalog.len());
    }

    let mut session = Session::new();
    if let Some(email) = &cli.email {
        if cli.sign_up {
            session.sign_up(email, &cli.password)?;
        } else {
            session.sign_in(email, &cli.password)?;
        }
    }

    match cli.command {
        Commands::List {
            location,
            amenity,
            check_in,
            check_out,
        } => {
            let criteria = FilterCriteria::new().with_dates(
                parse_date_input(&check_in)?,
                parse_date_input(&check_out)?,
            );
            let criteria = location
                .into_iter()
                .fold(criteria, |criteria, location| criteria.with_location(location));
            let criteria = amenity
                .into_iter()
                .fold(criteria, |criteria, amenity| criteria.with_amenity(amenity));

            list(&catalog, &criteria, &session, config.json_output)?;
        }
        Commands::Show { id } => {
            let listing = catalog.find(&id)?;
            show(listing, config.json_output)?;
        }
        Commands::Quote {
            id,
            check_in,
            check_out,
        } => {
            let listing = catalog.find(&id)?;
            let check_in = parse_date_input(&check_in)?;
            let check_out = parse_date_input(&check_out)?;
            let quote = pricing::quote(listing.price, check_in, check_out);

            // The breakdown is still shown, but reserve will refuse these
            match pricing::quote_stay(listing.price, check_in, check_out) {
                Err(err @ BookingError::InvalidRange { .. })
                | Err(err @ BookingError::AmountOverflow { .. }) => warn!("{}", err),
                _ => {}
            }

            if config.json_output {
                println!("{}", serde_json::to_string_pretty(&quote)?);
            } else if quote.is_complete() {
                println!("${} x {} nights: ${}", listing.price, quote.nights, quote.subtotal);
                println!("Service fee: ${}", quote.service_fee);
                println!("Total: ${}", quote.total);
            } else {
                println!("${} night", listing.price);
                println!("Select check-in and check-out dates to see the total");
            }
        }
        Commands::Reserve {
            id,
            check_in,
            check_out,
            guests,
        } => {
            let listing = catalog.find(&id)?;
            let request = ReservationRequest::new(
                parse_date_input(&check_in)?,
                parse_date_input(&check_out)?,
                guests,
            );

            if !session.is_signed_in() {
                warn!("Reserving as a guest; pass --email to sign in");
            }

            let reservation = pricing::reserve(listing, &request)?;
            if config.json_output {
                println!("{}", serde_json::to_string_pretty(&reservation)?);
            } else {
                println!("{}", reservation.confirmation());
            }
        }
    }

    // Sessions last for a single command
    session.sign_out();

    Ok(())
}

fn list(catalog: &Catalog, criteria: &FilterCriteria, session: &Session, json: bool) -> Result<()> {
    let listings = catalog.filter(criteria);

    if json {
        println!("{}", serde_json::to_string_pretty(&listings)?);
        return Ok(());
    }

    if let Some(user) = session.current_user() {
        println!("Signed in as {}\n", user.email);
    }

    println!("{}", availability_headline(listings.len()));
    if listings.is_empty() {
        println!("Try adjusting your filters to find more options");
        println!("Locations: {}", catalog.locations().join(", "));
        println!("Amenities: {}", catalog.amenities().join(", "));
        return Ok(());
    }
    println!();

    for (i, listing) in listings.iter().enumerate() {
        println!("{}. {} ({})", i + 1, listing.title, listing.id);
        println!("   {}", listing.location);
        println!("   ${} night · ★ {} ({} reviews)", listing.price, listing.rating, listing.review_count);
        println!();
    }

    Ok(())
}

fn show(listing: &Listing, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(listing)?);
        return Ok(());
    }

    println!("{}", listing.title);
    println!("★ {} ({} reviews) · {}", listing.rating, listing.review_count, listing.location);
    println!();
    println!("{} hosted by {}", listing.kind, listing.host.name);
    println!(
        "{} guests · {} bedrooms · {} beds · {} baths",
        listing.guests, listing.bedrooms, listing.beds, listing.baths
    );
    println!();
    println!("{}", listing.description);
    println!();
    println!("What this place offers:");
    for amenity in &listing.amenities {
        println!("   [{}] {}", amenities::glyph_for(amenity), amenity);
    }
    println!();
    println!("Hosted by {}, joined in {}", listing.host.name, listing.host.joined_date);
    println!("${} night", listing.price);

    Ok(())
}
