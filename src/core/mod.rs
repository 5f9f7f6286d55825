pub mod menu;
pub mod zoo;
