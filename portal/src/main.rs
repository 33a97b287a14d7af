//! # Portal CLI
//!
//! Small command-line surface over the portal client library, mainly for
//! smoke-testing a deployment: it persists the session file between
//! invocations exactly like the full UI would.
//!
//! ## Usage
//!
//! ```bash
//! portal login <username> <password>
//! portal register <username> <password> [email] [phone]
//! portal whoami
//! portal open <path>
//! portal activities [--all]
//! portal volunteers
//! portal logout
//! ```

use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use portal::utils::validation::{validate_password, validate_phone, validate_username};
use portal::{ApiClient, ApiService, AppError, Config, NavigationOutcome, Router, SessionStore};
use shared::{mask_phone, RegisterRequest};

fn init_tracing() {
    let filter = EnvFilter::try_from_env("PORTAL_LOG").unwrap_or_else(|_| EnvFilter::new("portal=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn usage() {
    eprintln!("usage: portal <command>");
    eprintln!();
    eprintln!("commands:");
    eprintln!("  login <username> <password>");
    eprintln!("  register <username> <password> [email] [phone]");
    eprintln!("  whoami");
    eprintln!("  open <path>");
    eprintln!("  activities [--all]");
    eprintln!("  volunteers");
    eprintln!("  logout");
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let config = match Config::from_env().map_err(AppError::Config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {e}");
        return ExitCode::FAILURE;
    }

    let session = Arc::new(SessionStore::load(&config.session_file));
    let router = Router::new(session.clone());
    let client = ApiClient::new(&config, session.clone());

    let args: Vec<String> = env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    let result = match args.as_slice() {
        ["login", username, password] => login(&client, username, password).await,
        ["register", username, password, rest @ ..] => {
            register(&client, username, password, rest).await
        }
        ["whoami"] => whoami(&client).await,
        ["open", path] => {
            open(&router, path);
            Ok(())
        }
        ["activities"] => activities(&client, false).await,
        ["activities", "--all"] => activities(&client, true).await,
        ["volunteers"] => volunteers(&client).await,
        ["logout"] => {
            client.logout();
            println!("Logged out.");
            Ok(())
        }
        _ => {
            usage();
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn login(client: &ApiClient, username: &str, password: &str) -> portal::Result<()> {
    let auth = client.login(username, password).await?;
    println!("Logged in as {} ({})", auth.user.username, auth.role);
    Ok(())
}

async fn register(
    client: &ApiClient,
    username: &str,
    password: &str,
    rest: &[&str],
) -> portal::Result<()> {
    for check in [validate_username(username), validate_password(password)] {
        if !check.is_valid {
            return Err(AppError::Validation(check.error.unwrap_or_default()));
        }
    }

    let email = rest.first().map(|s| s.to_string());
    let phone = rest.get(1).map(|s| s.to_string());
    if let Some(phone) = phone.as_deref() {
        let check = validate_phone(phone);
        if !check.is_valid {
            return Err(AppError::Validation(check.error.unwrap_or_default()));
        }
    }

    let request = RegisterRequest {
        username: username.to_string(),
        password: password.to_string(),
        email,
        phone,
    };

    let user = client.register(&request).await?;
    println!("Registered {} (id {})", user.username, user.id);
    Ok(())
}

async fn whoami(client: &ApiClient) -> portal::Result<()> {
    let session = client.session_store().snapshot();

    let Some(role) = session.role.filter(|_| session.is_authenticated()) else {
        println!("Not logged in.");
        return Ok(());
    };
    println!("Logged in with role {role}");

    if role == shared::Role::Volunteer {
        let profile = client.my_info().await?;
        println!("  name:  {}", profile.name);
        println!("  phone: {}", mask_phone(&profile.phone));
        if let Some(email) = &profile.email {
            println!("  email: {email}");
        }
    }

    Ok(())
}

fn open(router: &Router, path: &str) {
    match router.navigate(path) {
        Some(NavigationOutcome::Allow) => println!("allow {path}"),
        Some(outcome) => {
            // location() is always Some for redirect outcomes
            println!("redirect {}", outcome.location().unwrap_or_default());
        }
        None => println!("no route for {path}"),
    }
}

async fn activities(client: &ApiClient, all: bool) -> portal::Result<()> {
    let activities = if all {
        client.list_all_activities().await?
    } else {
        client.list_activities().await?
    };

    for activity in &activities {
        println!(
            "#{} {} @ {} on {} ({}/{}) [{:?}]",
            activity.id,
            activity.title,
            activity.location,
            activity.start_time.format("%Y-%m-%d %H:%M"),
            activity.registered_count,
            activity.capacity,
            activity.status,
        );
    }
    println!("{} activities", activities.len());
    Ok(())
}

async fn volunteers(client: &ApiClient) -> portal::Result<()> {
    let volunteers = client.list_volunteers().await?;

    for volunteer in &volunteers {
        println!(
            "#{} {} {}",
            volunteer.id,
            volunteer.name,
            mask_phone(&volunteer.phone)
        );
    }
    println!("{} volunteers", volunteers.len());
    Ok(())
}
