/*
[INPUT]:  YAML config path (first CLI argument, default ./plivo.yaml)
[OUTPUT]: Account details and live call listing
[POS]:    Examples - REST client usage
[UPDATE]: When REST client construction or endpoints change
*/

use plivo_adapter::*;

/// Example: Query the account and live calls
///
/// Expects a YAML file such as:
///
/// ```yaml
/// auth_id: MAXXXXXXXXXXXXXXXXXX
/// auth_token: your-auth-token
/// ```
#[tokio::main]
async fn main() {
    init_tracing();
    println!("=== Plivo REST Example ===\n");

    let path = std::env::args().nth(1).unwrap_or_else(|| "plivo.yaml".to_string());
    let client = match PlivoConfig::from_file(&path).and_then(PlivoConfig::into_client) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client from {}: {}", path, e);
            return;
        }
    };
    println!("✓ Client created for {}\n", client.api_base());

    println!("Querying account...");
    match client.get_account(Params::new()).await {
        Ok(response) => println!("✓ [{}] {:?}", response.status, response.body),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying live calls...");
    match client.get_live_calls(Params::new()).await {
        Ok(response) => println!("✓ [{}] {:?}", response.status, response.body),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nHanging up a call without call_uuid...");
    match client.hangup_call(Params::new()).await {
        Ok(response) => println!("✗ Unexpected response: {}", response.status),
        Err(e) => println!("✓ Rejected locally: {}", e),
    }

    println!("\n✓ REST example complete");
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("plivo_adapter=debug"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
