use easyauth_url::config;
use easyauth_url::url_builder::UrlBuilder;

/// Example demonstrating environment variable validation
///
/// This example shows how the crate handles missing environment variables
/// gracefully with clear error messages instead of panicking.
fn main() {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    // Validate all required environment variables upfront
    println!("Validating required environment variables...");
    match config::validate_env_vars() {
        Ok(()) => println!("✓ All required environment variables are set"),
        Err(e) => {
            eprintln!("✗ Configuration error: {e}");
            std::process::exit(1);
        }
    }

    // Now we can safely read the login endpoint and build a login URL
    let login_endpoint = match config::get_required_env_var("EASYAUTH_LOGIN_URL") {
        Ok(endpoint) => endpoint,
        Err(e) => {
            eprintln!("✗ Failed to read login endpoint: {e}");
            std::process::exit(1);
        }
    };
    println!("✓ Login endpoint configured: {login_endpoint}");

    let parameters = vec![
        ("post_login_redirect_url".to_string(), "/".to_string()),
        ("session_mode".to_string(), "token".to_string()),
    ];

    match UrlBuilder::append_query_parameters(&parameters, &login_endpoint) {
        Ok(login_url) => println!("Login URL ready: {login_url}"),
        Err(e) => {
            eprintln!("✗ Failed to build login URL: {e}");
            std::process::exit(1);
        }
    }
}
