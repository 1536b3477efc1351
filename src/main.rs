// src/main.rs

//! SCRS Client: terminal client for the Student Complaint Registration System.
//!
//! This is the main CLI entry point. Authenticate with `login`, then open the
//! dashboard matching your role (`student`, `staff`, or `admin`).

mod actions;
mod api;
mod config;
mod dashboard;
mod debounce;
mod error;
mod loader;
mod models;
mod pagination;
mod render;
mod session;
mod state;

use clap::{Parser, Subcommand};

use crate::api::{ApiClient, auth};
use crate::config::Config;
use crate::error::Result;
use crate::models::{Credentials, Registration};

#[derive(Parser, Debug)]
#[command(
    name = "scrs",
    version = "1.0.0",
    about = "Student Complaint Registration System client"
)]

/// CLI Arguments
struct Cli {
    #[arg(short, long, default_value = "data/config.toml")]
    config: String,

    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

/// CLI Commands
#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and store the session token
    Login {
        #[arg(short, long)]
        username: Option<String>,
    },
    /// Register a new student account
    Register,
    /// Drop the stored session
    Logout,
    /// Show the currently signed-in user
    Whoami,
    /// Open the student dashboard
    Student,
    /// Open the staff dashboard
    Staff,
    /// Open the admin dashboard
    Admin,
}

/// Main entry point
#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet);

    let config = Config::load_or_default(&cli.config);
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {e}");
        std::process::exit(2);
    }

    if let Err(e) = run(cli.command, &config).await {
        if e.is_unauthorized() {
            eprintln!("Session expired or invalid. Run 'scrs login' to sign in again.");
        } else {
            eprintln!("Error: {e}");
        }
        std::process::exit(1);
    }
}

async fn run(command: Command, config: &Config) -> Result<()> {
    let mut client = ApiClient::new(config).await?;

    match command {
        Command::Login { username } => {
            let mut lines = dashboard::input_lines();
            let username = match username {
                Some(name) => name,
                None => dashboard::ask(&mut lines, "Username").await?,
            };
            let password = dashboard::ask(&mut lines, "Password").await?;
            let session = auth::login(&mut client, &Credentials { username, password }).await?;
            println!(
                "✓ Signed in as {} ({})",
                session.user.full_name,
                session.user.role.as_str()
            );
        }
        Command::Register => {
            let mut lines = dashboard::input_lines();
            let registration = Registration {
                username: dashboard::ask(&mut lines, "Username").await?,
                password: dashboard::ask(&mut lines, "Password").await?,
                full_name: dashboard::ask(&mut lines, "Full name").await?,
                email: dashboard::ask(&mut lines, "Email").await?,
            };
            let session = auth::register(&mut client, &registration).await?;
            println!("✓ Account created. Signed in as {}", session.user.full_name);
        }
        Command::Logout => {
            auth::logout(&mut client).await?;
            println!("✓ Signed out");
        }
        Command::Whoami => match client.session() {
            Some(_) => {
                let user = auth::me(&client).await?;
                let department = user.department.as_deref().unwrap_or("-");
                println!(
                    "{} ({}) role={} department={}",
                    user.full_name,
                    user.username,
                    user.role.as_str(),
                    department
                );
            }
            None => println!("Not signed in"),
        },
        Command::Student => dashboard::student::run(&client, config).await?,
        Command::Staff => dashboard::staff::run(&client, config).await?,
        Command::Admin => dashboard::admin::run(&client, config).await?,
    }

    Ok(())
}

/// Initialize logging; RUST_LOG overrides the default filter.
fn init_logging(quiet: bool) {
    let default_filter = if quiet { "error" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp_secs()
        .init();
}
