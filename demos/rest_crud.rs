//! REST API CRUD walkthrough against a real org.
//!
//! Reads credentials from `SF_CLIENT_ID`, `SF_CLIENT_SECRET`, `SF_USERNAME`
//! and `SF_PASSWORD`. Set `SF_LOGIN_URL` to use a sandbox or My Domain.
//!
//! Run with: cargo run --example rest_crud

use sforce::client::DEFAULT_API_VERSION;
use sforce::{parse_sobject, Credentials, SalesforceRestClient, PRODUCTION_LOGIN_URL};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let login_url =
        std::env::var("SF_LOGIN_URL").unwrap_or_else(|_| PRODUCTION_LOGIN_URL.to_string());
    let client =
        SalesforceRestClient::connect(login_url, DEFAULT_API_VERSION, Credentials::from_env()?)?;

    println!("=== Salesforce REST CRUD ===\n");

    let account = parse_sobject(br#"{"Name": "Acme Corporation", "Industry": "Technology"}"#)?;
    let created = client.create_sobject("Account", &account).await?;
    println!("Created Account {}", created.id);

    let fetched = client.get_sobject("Account", &created.id).await?;
    println!("Fetched: {}", serde_json::to_string_pretty(&fetched)?);

    let update = parse_sobject(br#"{"Phone": "+1-555-0100"}"#)?;
    let updated = client.upsert_sobject("Account", &created.id, &update).await?;
    println!("Updated Account {} (success: {})", updated.id, updated.success);

    client.delete_sobject("Account", &created.id).await?;
    println!("Deleted Account {}", created.id);

    Ok(())
}
