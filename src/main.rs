//! XP Progress Dashboard
//!
//! A command-line front end: sign in, load the profile, print the statistics
//! and write the charts as SVG files.

use anyhow::{anyhow, bail, Context};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use xpstats::api::{http_client, load_profile, sign_in, GraphqlClient};
use xpstats::app::{draw_ui, App, SessionStore};
use xpstats::config::Config;
use xpstats::plotting::write_charts_async;

#[derive(Parser)]
#[command(name = "xpstats")]
#[command(about = "XP progress dashboard for GraphQL learning platforms", long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and store the session token
    Login {
        /// Username or email
        #[arg(long)]
        identifier: String,
        #[arg(long, env = "XPSTATS_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Discard the stored session
    Logout,
    /// Show whether a session is stored
    Status,
    /// Load the profile, print statistics and write the charts
    Profile {
        /// Directory for the SVG charts
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
        /// Print the view model as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let default_directive = if verbose { "xpstats=debug" } else { "xpstats=info" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    let store = SessionStore::new(config.session_file()?);
    let mut app = App::start(store.load().context("failed to read the session file")?);

    match cli.command {
        Commands::Login {
            identifier,
            password,
        } => {
            let http = http_client(&config)?;
            app.on_sign_in(sign_in(&http, &config.signin_url, &identifier, &password).await);
            match app.session() {
                Some(session) => {
                    store.save(session).context("failed to store the session")?;
                    println!("Signed in as {}.", identifier);
                }
                None => {
                    let message = app.form_error().unwrap_or("Login failed.").to_string();
                    bail!(message);
                }
            }
        }
        Commands::Logout => {
            store.clear().context("failed to remove the session file")?;
            app.on_logout();
            print!("{}", draw_ui(&app));
        }
        Commands::Status => {
            if app.is_logged_in() {
                println!("Signed in (session stored at {}).", store.path().display());
            } else {
                println!("Signed out.");
            }
        }
        Commands::Profile { out_dir, json } => {
            let Some(session) = app.session().cloned() else {
                bail!("not signed in; run `xpstats login --identifier <login or email>` first");
            };
            let client = GraphqlClient::from_config(&config, session)?;
            app.on_profile_loaded(load_profile(&client).await, &config);

            if !app.is_logged_in() {
                store.clear().context("failed to remove the expired session")?;
                eprint!("{}", draw_ui(&app));
                bail!("session expired; sign in again");
            }

            if json {
                let profile = app.profile();
                println!("{}", serde_json::to_string_pretty(&profile)?);
                for banner in app.banners() {
                    eprintln!("! {}", banner.message);
                }
            } else {
                print!("{}", draw_ui(&app));
            }

            if let Some(profile) = app.profile() {
                let written = write_charts_async(profile.charts.clone(), out_dir)
                    .await
                    .map_err(|e| anyhow!("failed to write charts: {}", e))?;
                for path in written {
                    eprintln!("wrote {}", path.display());
                }
            }
        }
    }

    Ok(())
}
