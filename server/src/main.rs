#[macro_use]
extern crate rocket;

mod entrypoints;

use std::sync::Arc;

use shared::BadgeCatalog;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

use nutri_play_server::{
    db::MemoryStore,
    ledger::{Ledger, MissingUserPolicy},
    AppLedger,
};

#[derive(Debug, serde::Deserialize)]
pub struct Env {
    require_existing_users: Option<bool>,
}

#[launch]
async fn rocket() -> _ {
    dotenv::dotenv().ok();

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().pretty());
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    let env = envy::from_env::<Env>().expect("Failed to load environment variables");
    let policy = if env.require_existing_users.unwrap_or(false) {
        MissingUserPolicy::RequireExisting
    } else {
        MissingUserPolicy::CreateOnFirstResult
    };

    let ledger: AppLedger = Ledger::new(
        MemoryStore::new(),
        Arc::new(BadgeCatalog::builtin()),
        policy,
    );

    let cors = rocket_cors::CorsOptions::default()
        .to_cors()
        .expect("Failed to build CORS options");

    rocket::build()
        .manage(ledger)
        .attach(cors)
        .attach(entrypoints::stage())
}
