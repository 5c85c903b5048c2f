use dotenv::dotenv;
use easyauth_url::config;
use easyauth_url::error::Result;
use easyauth_url::url_builder::{QueryParams, UrlBuilder};

fn main() -> Result<()> {
    dotenv().ok();

    config::validate_env_vars()?;

    let login_endpoint = config::get_required_env_var("EASYAUTH_LOGIN_URL")?;
    let redirect = config::get_env_var_or("EASYAUTH_POST_LOGIN_REDIRECT", "/");

    println!("Building login URL for {login_endpoint}");

    let parameters: QueryParams = vec![
        ("post_login_redirect_url".to_string(), redirect),
        ("session_mode".to_string(), "token".to_string()),
    ];

    let login_url = UrlBuilder::append_query_parameters(&parameters, &login_endpoint)?;
    println!("Login URL: {login_url}");

    Ok(())
}
