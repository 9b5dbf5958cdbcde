mod config_cmd;
pub mod interactive;
mod pet;

use clap::ValueEnum;

pub use config_cmd::ConfigCommand;
pub use pet::PetCommand;

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
