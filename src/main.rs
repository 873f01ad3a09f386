//! Activity Board CLI
//!
//! Main application entry point: loads configuration, performs the initial
//! activity fetch, then serves a line-oriented command loop for sign-ups
//! and removals.

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use activity_board::{
    api::ActivitiesClient,
    board::ActivityBoard,
    config::Settings,
    utils::logging,
    view::{ConsoleView, RemovalHandle},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let settings = Settings::new().context("Failed to load configuration")?;
    settings.validate()?;

    // Initialize logging; the guard must outlive the command loop
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting activity board...");

    let api = ActivitiesClient::new(&settings.server)?;
    let mut board = ActivityBoard::new(api, ConsoleView::new(), settings.ui.clone());

    // Initial page load
    board.load_activities().await;
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("list") => {
                board.load_activities().await;
            }
            Some("signup") => match parts.next() {
                Some(email) => {
                    let activity = parts.collect::<Vec<_>>().join(" ");
                    if activity.is_empty() {
                        println!("usage: signup <email> <activity>");
                    } else {
                        board.submit_signup(email, &activity).await;
                    }
                }
                None => println!("usage: signup <email> <activity>"),
            },
            Some("remove") => match parts.next() {
                Some(email) => {
                    let activity = parts.collect::<Vec<_>>().join(" ");
                    if activity.is_empty() {
                        println!("usage: remove <email> <activity>");
                    } else {
                        let handle = RemovalHandle::new(&activity, email);
                        board.remove_participant(&handle).await;
                    }
                }
                None => println!("usage: remove <email> <activity>"),
            },
            Some("quit") | Some("exit") => break,
            _ => print_help(),
        }
    }

    info!("Activity board shut down.");

    Ok(())
}

fn print_help() {
    println!("commands:");
    println!("  list                         refresh the activity list");
    println!("  signup <email> <activity>    sign up for an activity");
    println!("  remove <email> <activity>    unregister a participant");
    println!("  quit                         exit");
}
