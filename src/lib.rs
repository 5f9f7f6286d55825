pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::memory::InMemoryAnimalRepository;
pub use crate::core::{
    menu::{CommandLoop, InputPolicy},
    zoo::ZooService,
};
pub use crate::domain::model::{Animal, AnimalProfile, Flier, Lion, Parrot, Snake};
pub use crate::domain::ports::AnimalRepository;
pub use crate::utils::error::{Result, ZooError};
