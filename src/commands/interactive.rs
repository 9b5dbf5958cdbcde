//! Line-driven interactive session.
//!
//! Reads one intent per line, dispatches it to the controller, and redraws
//! the screen. Expiry timers are applied as they fire, so notifications and
//! action pulses disappear on their own.

use std::io::{self, Write};
use std::str::FromStr;

use moodpet_core::{Controller, Emotion, Modal, PetAction, PetApi};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::views;

const HELP: &str = "\
Commands:
  feed | play | train      care for your pet
  mood [emotion]           open the mood tracker, or log an emotion directly
  shop | achievements      open a view
  close                    close the open view
  rename [name]            rename your pet
  buy <item>               buy a shop item
  refresh                  reload everything from the server
  help                     show this help
  quit                     leave";

#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Action(PetAction),
    OpenModal(Modal),
    CloseModal,
    LogMood(Emotion),
    Rename(Option<String>),
    Buy(String),
    Refresh,
    Help,
    Quit,
    Unknown(String),
}

/// Parses one input line. Blank lines yield `None`.
///
/// While the mood tracker is open a bare emotion logs it.
pub fn parse_intent(line: &str, modal: Modal) -> Option<Intent> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let intent = match command.to_lowercase().as_str() {
        "feed" | "play" | "train" => match PetAction::from_str(command) {
            Ok(action) => Intent::Action(action),
            Err(_) => Intent::Unknown(line.to_string()),
        },
        "mood" if rest.is_empty() => Intent::OpenModal(Modal::Mood),
        "mood" => match Emotion::from_str(rest) {
            Ok(emotion) => Intent::LogMood(emotion),
            Err(_) => Intent::Unknown(line.to_string()),
        },
        "shop" => Intent::OpenModal(Modal::Shop),
        "achievements" | "ach" => Intent::OpenModal(Modal::Achievements),
        "close" | "back" => Intent::CloseModal,
        "rename" if rest.is_empty() => Intent::Rename(None),
        "rename" => Intent::Rename(Some(rest.to_string())),
        "buy" if !rest.is_empty() => Intent::Buy(rest.to_string()),
        "refresh" => Intent::Refresh,
        "help" | "?" => Intent::Help,
        "quit" | "exit" | "q" => Intent::Quit,
        _ => match (modal, Emotion::from_str(line)) {
            (Modal::Mood, Ok(emotion)) => Intent::LogMood(emotion),
            _ => Intent::Unknown(line.to_string()),
        },
    };
    Some(intent)
}

async fn apply<A: PetApi>(controller: &mut Controller<A>, intent: Intent) {
    match intent {
        Intent::Action(action) => controller.perform_action(action).await,
        Intent::OpenModal(modal) => controller.open_modal(modal),
        Intent::CloseModal => controller.close_modal(),
        Intent::LogMood(emotion) => controller.submit_mood(emotion).await,
        Intent::Rename(name) => controller.rename(name).await,
        Intent::Buy(item) => controller.purchase(&item),
        Intent::Refresh => controller.refresh().await,
        Intent::Unknown(line) => {
            controller.notify(format!("Unknown command '{}' (type 'help')", line))
        }
        Intent::Help | Intent::Quit => {}
    }
}

fn redraw(screen: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "\n{}\n{}", "=".repeat(40), screen)?;
    write!(stdout, "> ")?;
    stdout.flush()
}

pub async fn run<A: PetApi>(controller: &mut Controller<A>) -> io::Result<()> {
    controller.bootstrap().await;
    redraw(&views::render(controller.state()))?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::debug!("stdin closed, leaving interactive session");
                    break;
                };
                let Some(intent) = parse_intent(&line, controller.state().modal) else {
                    redraw(&views::render(controller.state()))?;
                    continue;
                };

                match intent {
                    Intent::Quit => break,
                    Intent::Help => {
                        println!("{}", HELP);
                        redraw(&views::render(controller.state()))?;
                        continue;
                    }
                    Intent::Rename(None) if controller.state().is_loaded() => {
                        print!("New name (leave empty to keep): ");
                        io::stdout().flush()?;
                        let name = lines.next_line().await?;
                        controller.rename(name).await;
                    }
                    intent => apply(controller, intent).await,
                }
            }
            Some(event) = controller.next_timer_event() => {
                controller.apply_timer_event(event);
            }
        }

        redraw(&views::render(controller.state()))?;
    }

    Ok(())
}
