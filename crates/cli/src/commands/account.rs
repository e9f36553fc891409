//! Account commands: login, registration, profile, and addresses.

#![allow(clippy::print_stdout)]

use std::fs;

use rave_storefront::api::{Credentials, NewAddress, NewUser};
use rave_storefront::error::{AppError, Result};
use rave_storefront::state::AppState;

/// Log in and persist the session token for later invocations.
pub async fn login(state: &AppState, email: String, password: String) -> Result<()> {
    let session = state
        .auth()
        .login(&Credentials { email, password })
        .await?;

    save_token(state, &session.token)?;
    println!("Logged in as {} ({})", session.user.name, session.user.role);
    Ok(())
}

/// Create an account and log it in.
pub async fn register(
    state: &AppState,
    name: String,
    email: String,
    password: String,
    phone: Option<String>,
) -> Result<()> {
    let session = state
        .auth()
        .register(&NewUser {
            name,
            email,
            password,
            phone,
        })
        .await?;

    save_token(state, &session.token)?;
    println!("Welcome, {}!", session.user.name);
    Ok(())
}

/// Show the logged-in account.
pub async fn whoami(state: &AppState) -> Result<()> {
    if state.config().api_token.is_none() {
        return Err(AppError::NotAuthenticated);
    }
    let user = state.auth().profile().await?;
    println!("{} <{}> - {}", user.name, user.email, user.role);
    Ok(())
}

/// List saved addresses.
pub async fn addresses(state: &AppState) -> Result<()> {
    let addresses = state.addresses().list().await?;
    if addresses.is_empty() {
        println!("No addresses saved");
        return Ok(());
    }

    for address in addresses {
        let marker = if address.is_default { " (default)" } else { "" };
        println!(
            "#{:<4} {}: {}, {} {}{marker}",
            address.id, address.label, address.address_line, address.city, address.postal_code
        );
    }
    Ok(())
}

/// Save a new address.
pub async fn add_address(state: &AppState, address: NewAddress) -> Result<()> {
    let created = state.addresses().create(&address).await?;
    println!("Address #{} saved", created.id);
    Ok(())
}

/// Overwrite a saved address.
pub async fn update_address(state: &AppState, id: i32, address: NewAddress) -> Result<()> {
    state
        .addresses()
        .update(rave_core::AddressId::new(id), &address)
        .await?;
    println!("Address #{id} updated");
    Ok(())
}

/// Delete a saved address.
pub async fn delete_address(state: &AppState, id: i32) -> Result<()> {
    state
        .addresses()
        .delete(rave_core::AddressId::new(id))
        .await?;
    println!("Address #{id} deleted");
    Ok(())
}

/// Write the token next to the cart file so the session survives across
/// invocations, like a browser profile would.
fn save_token(state: &AppState, token: &str) -> Result<()> {
    let path = &state.config().token_path;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| AppError::Internal(e.to_string()))?;
        }
    }
    fs::write(path, token).map_err(|e| AppError::Internal(e.to_string()))?;
    Ok(())
}
