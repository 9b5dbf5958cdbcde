use clap::Subcommand;
use std::io::{self, Write};

use moodpet_core::{Controller, Emotion, Modal, PetAction, PetApi};

use super::OutputFormat;
use crate::views;

#[derive(Subcommand)]
pub enum PetCommand {
    /// Show the pet and its stats
    Status {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Feed the pet
    Feed,

    /// Play with the pet
    Play,

    /// Train the pet
    Train,

    /// Log how you feel (opens the mood tracker when no emotion is given)
    Mood {
        /// One of: happy, sad, angry, anxious, calm, excited
        emotion: Option<Emotion>,
    },

    /// Rename the pet (prompts when no name is given)
    Rename {
        /// New name
        name: Option<String>,
    },

    /// Browse the shop
    Shop,

    /// Show achievements
    Achievements,

    /// Buy a shop item
    Buy {
        /// Item ID or name
        item: String,
    },
}

impl PetCommand {
    pub async fn run<A: PetApi>(
        &self,
        controller: &mut Controller<A>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        controller.bootstrap().await;

        match self {
            PetCommand::Status { format } => {
                if let OutputFormat::Json = format {
                    println!("{}", serde_json::to_string_pretty(controller.state())?);
                    return Ok(());
                }
            }
            PetCommand::Feed => controller.perform_action(PetAction::Feed).await,
            PetCommand::Play => controller.perform_action(PetAction::Play).await,
            PetCommand::Train => controller.perform_action(PetAction::Train).await,
            PetCommand::Mood { emotion } => {
                controller.open_modal(Modal::Mood);
                if let Some(emotion) = emotion {
                    controller.submit_mood(*emotion).await;
                }
            }
            PetCommand::Rename { name } => {
                let name = match (name, &controller.state().pet) {
                    (Some(name), _) => Some(name.clone()),
                    (None, Some(pet)) => prompt_name(&pet.name)?,
                    (None, None) => None,
                };
                controller.rename(name).await;
            }
            PetCommand::Shop => controller.open_modal(Modal::Shop),
            PetCommand::Achievements => controller.open_modal(Modal::Achievements),
            PetCommand::Buy { item } => controller.purchase(item),
        }

        println!("{}", views::render(controller.state()));
        Ok(())
    }
}

/// Asks for a new name on stdin. Returns `None` on end of input.
pub fn prompt_name(current: &str) -> io::Result<Option<String>> {
    print!("New name for {} (leave empty to keep): ", current);
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
