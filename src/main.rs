use dotenvy::dotenv;
use everafter::{
    config::{database, seed},
    errors::Result,
    storage::SeaOrmStorage,
    store::{WeddingData, WeddingStore},
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. First-run seed data
    let seed = seed::load_default_config()
        .inspect_err(|e| error!("Failed to load seed configuration: {}", e))?;

    // 4. Open the database and make sure the table exists
    let database_url = database::get_database_url();
    let db = database::create_connection(&database_url)
        .await
        .inspect(|_| info!("Database connected."))
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db).await?;

    // 5. Load the store
    let mut store = WeddingStore::new(SeaOrmStorage::new(db), WeddingData::from_seed(&seed));
    let report = store.load().await;
    for (key, e) in &report.failed {
        warn!(%key, "Kept defaults: {}", e);
    }

    let summary = store.dashboard(chrono::Utc::now());
    let settings = store.settings();
    if summary.is_setup {
        info!(
            "{} & {} - {}",
            settings.partner1_name, settings.partner2_name, settings.venue_name
        );
    } else {
        info!("Wedding not set up yet; partner names are missing.");
    }
    if let Some(countdown) = summary.countdown {
        info!(
            days = countdown.days,
            hours = countdown.hours,
            minutes = countdown.minutes,
            "Countdown"
        );
    }
    info!(
        total = summary.budget.total_budget,
        allocated = summary.budget.total_allocated,
        spent = summary.budget.total_spent,
        remaining = summary.budget.remaining(),
        "Budget"
    );
    info!(
        confirmed = summary.rsvp.confirmed,
        pending = summary.rsvp.pending,
        declined = summary.rsvp.declined,
        "Guests"
    );
    info!(
        completed = summary.tasks.completed,
        total = summary.tasks.total,
        percent = summary.tasks.percent(),
        "Tasks"
    );
    info!(
        received = summary.gifts.total,
        thank_yous_pending = summary.gifts.pending_thank_yous(),
        "Gifts"
    );

    store.close().await
}
