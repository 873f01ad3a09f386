//! Terminal implementation of the board view

use std::io::{BufRead, Write};

use super::{BoardSnapshot, BoardView, Severity};

/// Renders the board to stdout and reads confirmations from stdin
#[derive(Debug, Default)]
pub struct ConsoleView {
    message_visible: bool,
}

impl ConsoleView {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BoardView for ConsoleView {
    fn render_board(&mut self, snapshot: &BoardSnapshot) {
        println!();
        for card in &snapshot.cards {
            println!("{}", card.name);
            println!("  {}", card.description);
            println!("  Schedule: {}", card.schedule);
            println!("  Availability: {} spots left", card.spots_left);
            println!("  Participants ({})", card.participants.len());
            if card.participants.is_empty() {
                println!("    No participants yet");
            } else {
                for row in &card.participants {
                    println!("    [{}] {}", row.badge, row.email);
                }
            }
            println!();
        }
        println!("Activities: {}", snapshot.selector.join(" | "));
    }

    fn render_load_failure(&mut self, notice: &str) {
        println!("{}", notice);
    }

    fn show_message(&mut self, text: &str, severity: Severity) {
        self.message_visible = true;
        println!("[{}] {}", severity.as_class(), text);
    }

    fn hide_message(&mut self) {
        // Nothing to erase on a scrolling terminal; just track visibility
        self.message_visible = false;
    }

    fn reset_signup_form(&mut self) {
        // The command loop keeps no form state between lines
    }

    fn confirm_removal(&mut self, email: &str, activity: &str) -> bool {
        print!("Unregister {} from {}? [y/N] ", email, activity);
        std::io::stdout().flush().ok();

        let mut answer = String::new();
        if std::io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }

        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}
