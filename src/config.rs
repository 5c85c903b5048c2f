use crate::error::{EasyAuthError, Result};
use std::env;

/// Required environment variables for the demo application
const REQUIRED_ENV_VARS: &[&str] = &["EASYAUTH_LOGIN_URL"];

/// Validates that all required environment variables are set
///
/// # Errors
/// Returns `EasyAuthError::MissingEnvVar` listing every missing variable
///
/// # Returns
/// * `Result<()>` - Ok if all required environment variables are present
pub fn validate_env_vars() -> Result<()> {
    let missing_vars: Vec<&str> = REQUIRED_ENV_VARS
        .iter()
        .filter(|var_name| env::var(var_name).is_err())
        .copied()
        .collect();

    if !missing_vars.is_empty() {
        return Err(EasyAuthError::MissingEnvVar(missing_vars.join(", ")));
    }

    Ok(())
}

/// Gets a required environment variable
///
/// # Arguments
/// * `var_name` - The name of the environment variable to retrieve
///
/// # Errors
/// Returns `EasyAuthError::MissingEnvVar` if the environment variable is not set
///
/// # Returns
/// * `Result<String>` - The value of the environment variable
pub fn get_required_env_var(var_name: &str) -> Result<String> {
    env::var(var_name).map_err(|_| EasyAuthError::MissingEnvVar(var_name.to_string()))
}

/// Gets an environment variable, falling back to a default when it is unset
pub fn get_env_var_or(var_name: &str, default: &str) -> String {
    env::var(var_name).unwrap_or_else(|_| default.to_string())
}
