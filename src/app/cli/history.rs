use chrono::{DateTime, Local};
use clap::Subcommand;

use crate::adapters::{ArboardClipboard, DialoguerConfirmer};
use crate::app::{AppContext, api};
use crate::domain::{AppError, HistoryEntry};
use crate::ports::{Confirmer, FixedConfirmer};

const PREVIEW_CHARS: usize = 72;

#[derive(Subcommand, Default)]
pub enum HistoryCommands {
    /// List saved prompts, newest first
    #[default]
    #[clap(visible_alias = "ls")]
    List,
    /// Print one entry in full
    Show {
        /// Position in the list (1 = newest)
        position: usize,
    },
    /// Print an entry as the current query and prompt
    Restore {
        /// Position in the list (1 = newest)
        position: usize,
    },
    /// Expand or collapse an entry in the list view
    Toggle {
        /// Position in the list (1 = newest)
        position: usize,
    },
    /// Copy an entry's prompt to the clipboard
    #[clap(visible_alias = "cp")]
    Copy {
        /// Position in the list (1 = newest)
        position: usize,
    },
    /// Delete all saved prompts
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn run_history(ctx: &AppContext, command: HistoryCommands) -> Result<(), AppError> {
    match command {
        HistoryCommands::List => {
            let history = api::history(ctx)?;
            if history.is_empty() {
                println!("No history yet.");
                return Ok(());
            }
            for (index, entry) in history.entries().iter().enumerate() {
                println!("{}", render_entry(index + 1, entry));
            }
        }
        HistoryCommands::Show { position } => {
            let history = api::history(ctx)?;
            let entry = history
                .at_position(position)
                .ok_or_else(|| AppError::HistoryEntryNotFound(format!("#{}", position)))?;
            println!("{}", render_full(entry));
        }
        HistoryCommands::Restore { position } => {
            let entry = api::restore(ctx, position)?;
            println!("{}", render_full(&entry));
        }
        HistoryCommands::Toggle { position } => {
            let entry = api::toggle_entry(ctx, position)?;
            let state = if entry.expanded { "Expanded" } else { "Collapsed" };
            println!("✅ {} entry #{}", state, position);
        }
        HistoryCommands::Copy { position } => {
            let mut clipboard = ArboardClipboard::new();
            api::copy_entry(ctx, position, &mut clipboard)?;
            println!("✅ Copied entry #{} to clipboard", position);
        }
        HistoryCommands::Clear { yes } => {
            let confirmer: Box<dyn Confirmer> =
                if yes { Box::new(FixedConfirmer(true)) } else { Box::new(DialoguerConfirmer) };
            if api::clear_history(ctx, confirmer.as_ref())? {
                println!("✅ Cleared prompt history");
            } else {
                println!("History left unchanged");
            }
        }
    }
    Ok(())
}

pub(super) fn format_timestamp(timestamp: i64) -> String {
    DateTime::from_timestamp_millis(timestamp)
        .map(|at| at.with_timezone(&Local).format("%b %-d, %H:%M").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

/// One list line; expanded entries also carry their full result.
pub(super) fn render_entry(position: usize, entry: &HistoryEntry) -> String {
    let header = format!(
        "{:>2}. [{}] {}",
        position,
        format_timestamp(entry.timestamp),
        preview(&entry.prompt)
    );
    if entry.expanded {
        let body: Vec<String> = entry.result.lines().map(|line| format!("      {}", line)).collect();
        format!("{}\n{}", header, body.join("\n"))
    } else {
        format!("{}\n      {}", header, preview(&entry.result))
    }
}

pub(super) fn render_full(entry: &HistoryEntry) -> String {
    format!(
        "Query ({}):\n{}\n\nPrompt:\n{}",
        format_timestamp(entry.timestamp),
        entry.prompt,
        entry.result
    )
}

fn preview(text: &str) -> String {
    let first_line = text.lines().next().unwrap_or_default();
    let mut shortened: String = first_line.chars().take(PREVIEW_CHARS).collect();
    if first_line.chars().count() > PREVIEW_CHARS || text.lines().nth(1).is_some() {
        shortened.push('…');
    }
    shortened
}
