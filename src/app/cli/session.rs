//! Interactive terminal session over the prompt controller.

use std::io::ErrorKind;

use dialoguer::{Error as DialoguerError, Input, Select};

use super::history::{render_entry, render_full};
use crate::adapters::{ArboardClipboard, DialoguerConfirmer};
use crate::app::AppContext;
use crate::app::controller::{Outcome, PromptController};
use crate::domain::{ActiveView, AppError, SessionState};
use crate::ports::{ClipboardWriter, Clock, LocalStore, PromptService};

const TIPS: [&str; 3] = [
    "Describe the task, the audience and the output format you expect.",
    "Mention constraints such as length, tone or examples to follow.",
    "Use Refine to iterate on a generated prompt instead of starting over.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Generate,
    EditQuery,
    ShowResult,
    Copy,
    Refine,
    StartOver,
    ToggleHistory,
    Restore,
    ToggleEntry,
    CopyEntry,
    ClearHistory,
    ToggleTheme,
    Quit,
}

impl MenuItem {
    fn label(self) -> &'static str {
        match self {
            MenuItem::Generate => "Generate prompt",
            MenuItem::EditQuery => "Edit query",
            MenuItem::ShowResult => "Show generated prompt",
            MenuItem::Copy => "Copy prompt",
            MenuItem::Refine => "Refine prompt",
            MenuItem::StartOver => "Start over",
            MenuItem::ToggleHistory => "Show/hide history",
            MenuItem::Restore => "Restore history entry",
            MenuItem::ToggleEntry => "Expand/collapse history entry",
            MenuItem::CopyEntry => "Copy history entry",
            MenuItem::ClearHistory => "Clear history",
            MenuItem::ToggleTheme => "Toggle theme",
            MenuItem::Quit => "Quit",
        }
    }
}

/// Menu entries available for the current state.
fn menu_for(session: &SessionState, has_history: bool) -> Vec<MenuItem> {
    let mut items = match session.view {
        ActiveView::Input => {
            let mut items = vec![MenuItem::Generate];
            if !session.result.is_empty() {
                items.push(MenuItem::ShowResult);
            }
            items
        }
        ActiveView::Output => {
            vec![MenuItem::Copy, MenuItem::Refine, MenuItem::EditQuery, MenuItem::StartOver]
        }
    };

    items.push(MenuItem::ToggleHistory);
    if session.show_history && has_history {
        items.extend([
            MenuItem::Restore,
            MenuItem::ToggleEntry,
            MenuItem::CopyEntry,
            MenuItem::ClearHistory,
        ]);
    }
    items.extend([MenuItem::ToggleTheme, MenuItem::Quit]);
    items
}

/// Whether the session continues after a menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Quit,
}

pub fn run_session(ctx: &AppContext) -> Result<(), AppError> {
    let mut controller = ctx.controller()?;
    let mut clipboard = ArboardClipboard::new();
    println!("Promptology ({} theme)", controller.theme());

    loop {
        render(&controller);

        let items = menu_for(controller.session(), !controller.history().is_empty());
        let labels: Vec<&str> = items.iter().map(|item| item.label()).collect();
        let selection = Select::new()
            .with_prompt("What next?")
            .items(&labels)
            .default(0)
            .interact_opt()
            .map_err(|err| AppError::InteractionError(format!("Failed to read selection: {}", err)))?;

        let Some(index) = selection else {
            return Ok(());
        };
        if step(&mut controller, items[index], &mut clipboard) == Step::Quit {
            return Ok(());
        }
    }
}

/// Run one menu choice. Failures are shown inline and never end the session.
fn step<P, S, C>(
    controller: &mut PromptController<P, S, C>,
    item: MenuItem,
    clipboard: &mut dyn ClipboardWriter,
) -> Step
where
    P: PromptService,
    S: LocalStore,
    C: Clock,
{
    if item == MenuItem::Quit {
        return Step::Quit;
    }
    if let Err(err) = handle(controller, item, clipboard) {
        tracing::debug!("{:?} failed: {}", item, err);
        println!("\n❌ {}", err);
    }
    Step::Continue
}

fn render<P, S, C>(controller: &PromptController<P, S, C>)
where
    P: PromptService,
    S: LocalStore,
    C: Clock,
{
    let session = controller.session();

    if session.show_tips {
        println!("\nTips:");
        for tip in TIPS {
            println!("  • {}", tip);
        }
    }

    if let Some(error) = &session.error {
        println!("\n❌ {}", error);
    }

    if session.view == ActiveView::Output && !session.result.is_empty() {
        println!("\nQuery:\n{}\n\nPrompt:\n{}", session.prompt, session.result);
    }

    if session.show_history {
        println!("\nHistory:");
        if controller.history().is_empty() {
            println!("  (empty)");
        }
        for (index, entry) in controller.history().entries().iter().enumerate() {
            println!("{}", render_entry(index + 1, entry));
        }
    }
    println!();
}

fn handle<P, S, C>(
    controller: &mut PromptController<P, S, C>,
    item: MenuItem,
    clipboard: &mut dyn ClipboardWriter,
) -> Result<(), AppError>
where
    P: PromptService,
    S: LocalStore,
    C: Clock,
{
    match item {
        MenuItem::Generate => {
            let initial = controller.session().prompt.clone();
            let Some(query) = read_text("Describe what the prompt should do", &initial)? else {
                return Ok(());
            };
            controller.set_prompt(query);
            println!("Generating...");
            report(controller.generate_current()?);
        }
        MenuItem::EditQuery => controller.set_view(ActiveView::Input),
        MenuItem::ShowResult => controller.set_view(ActiveView::Output),
        MenuItem::Copy => {
            if controller.copy_result(clipboard)? {
                println!("✅ Copied!");
            }
            controller.reset_copied();
        }
        MenuItem::Refine => {
            controller.show_feedback_input();
            let initial = controller.session().feedback.clone();
            let Some(feedback) = read_text("How should the prompt change?", &initial)? else {
                return Ok(());
            };
            controller.set_feedback(feedback);
            println!("Refining...");
            report(controller.refine_current()?);
        }
        MenuItem::StartOver => controller.start_over(),
        MenuItem::ToggleHistory => controller.toggle_history_panel(),
        MenuItem::Restore => {
            if let Some(position) = pick_entry(controller, "Restore which entry?")? {
                let entry = controller.restore_position(position)?;
                println!("{}", render_full(&entry));
            }
        }
        MenuItem::ToggleEntry => {
            if let Some(position) = pick_entry(controller, "Expand/collapse which entry?")? {
                let timestamp = controller.entry_at(position)?.timestamp;
                controller.toggle_expansion(timestamp)?;
            }
        }
        MenuItem::CopyEntry => {
            if let Some(position) = pick_entry(controller, "Copy which entry?")? {
                let timestamp = controller.entry_at(position)?.timestamp;
                controller.copy_entry(timestamp, clipboard)?;
                println!("✅ Copied!");
            }
        }
        MenuItem::ClearHistory => {
            if controller.clear_history(&DialoguerConfirmer)? {
                println!("✅ History cleared");
            }
        }
        MenuItem::ToggleTheme => {
            let theme = controller.toggle_theme()?;
            println!("Theme: {}", theme);
        }
        MenuItem::Quit => {}
    }
    Ok(())
}

fn report(outcome: Outcome) {
    match outcome {
        Outcome::Completed | Outcome::Failed(_) => {}
        Outcome::Rejected(reason) => println!("⚠️  {}", reason),
        Outcome::Ignored => println!("⚠️  A request is already in progress"),
    }
}

fn pick_entry<P, S, C>(
    controller: &PromptController<P, S, C>,
    prompt: &str,
) -> Result<Option<usize>, AppError>
where
    P: PromptService,
    S: LocalStore,
    C: Clock,
{
    let labels: Vec<String> = controller
        .history()
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let first_line = entry.prompt.lines().next().unwrap_or_default();
            format!("{}. {}", index + 1, first_line)
        })
        .collect();

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact_opt()
        .map_err(|err| AppError::InteractionError(format!("Failed to select entry: {}", err)))?;

    Ok(selection.map(|index| index + 1))
}

fn read_text(prompt: &str, initial: &str) -> Result<Option<String>, AppError> {
    match Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()
    {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::InteractionError(format!("Failed to read input: {}", err))),
    }
}
