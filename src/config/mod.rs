use crate::core::menu::InputPolicy;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "zoo-demo")]
#[command(about = "Menu-driven zoo: add lions, parrots and snakes, then list them")]
pub struct CliConfig {
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(
        long,
        help = "Ask again on a non-numeric age and return to the menu on invalid animals instead of exiting"
    )]
    pub reprompt: bool,
}

impl CliConfig {
    pub fn input_policy(&self) -> InputPolicy {
        if self.reprompt {
            InputPolicy::Reprompt
        } else {
            InputPolicy::Abort
        }
    }
}
