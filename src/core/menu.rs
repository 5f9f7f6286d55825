use crate::core::zoo::ZooService;
use crate::domain::model::{Animal, Lion, Parrot, Snake};
use crate::domain::ports::AnimalRepository;
use crate::utils::error::{Result, ZooError};
use crate::utils::validation::{parse_integer, parse_yes_no};
use std::io::{BufRead, Write};

const MENU: &str = "\n== Zoo Menu ==
1. Lisää leijona
2. Lisää papukaija
3. Lisää käärme
4. Näytä kaikki eläimet
5. Lopeta";

const CHOICE_PROMPT: &str = "Valinta: ";
const NAME_PROMPT: &str = "Anna nimi: ";
const AGE_PROMPT: &str = "Anna ikä: ";
const ALPHA_PROMPT: &str = "Onko alfayksilö? (k/e): ";
const VENOMOUS_PROMPT: &str = "Onko myrkyllinen? (k/e): ";
const INVALID_CHOICE: &str = "Virheellinen valinta!";
const INVALID_AGE: &str = "Virheellinen ikä!";
const FAREWELL: &str = "Ohjelma päättyi.";

/// What happens when the user types something the zoo cannot accept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputPolicy {
    /// A bad age or an invalid name/age ends the session with an error.
    #[default]
    Abort,
    /// A bad age is asked again; an invalid name/age is reported and the menu comes back.
    Reprompt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimalKind {
    Lion,
    Parrot,
    Snake,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add(AnimalKind),
    ListAll,
    Quit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Add(AnimalKind::Lion)),
            "2" => Some(MenuChoice::Add(AnimalKind::Parrot)),
            "3" => Some(MenuChoice::Add(AnimalKind::Snake)),
            "4" => Some(MenuChoice::ListAll),
            "5" => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

/// Interactive menu over any line source and sink. Runs until the quit
/// choice or the end of input at the menu prompt.
pub struct CommandLoop<'a, R: AnimalRepository, I: BufRead, O: Write> {
    zoo: &'a mut ZooService<R>,
    input: I,
    output: O,
    policy: InputPolicy,
}

impl<'a, R: AnimalRepository, I: BufRead, O: Write> CommandLoop<'a, R, I, O> {
    pub fn new(zoo: &'a mut ZooService<R>, input: I, output: O, policy: InputPolicy) -> Self {
        Self {
            zoo,
            input,
            output,
            policy,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "{}", MENU)?;
            self.prompt(CHOICE_PROMPT)?;

            let Some(line) = self.read_line()? else {
                tracing::debug!("Input closed at the menu, leaving");
                break;
            };

            let choice = MenuChoice::parse(&line);
            tracing::debug!("Menu input {:?} -> {:?}", line, choice);

            match choice {
                Some(MenuChoice::Add(kind)) => self.add(kind)?,
                Some(MenuChoice::ListAll) => {
                    self.zoo.announce_all(&mut self.output)?;
                    self.zoo.show_fliers(&mut self.output)?;
                }
                Some(MenuChoice::Quit) => break,
                None => {
                    tracing::warn!("Unknown menu choice {:?}", line);
                    writeln!(self.output, "{}", INVALID_CHOICE)?;
                }
            }
        }

        writeln!(self.output, "{}", FAREWELL)?;
        self.output.flush()?;
        Ok(())
    }

    fn add(&mut self, kind: AnimalKind) -> Result<()> {
        match self.read_animal(kind) {
            Ok(animal) => self.zoo.add_animal(animal),
            Err(e) if self.policy == InputPolicy::Reprompt && e.is_input_error() => {
                tracing::warn!("Rejected {:?}: {}", kind, e);
                writeln!(self.output, "{}", e)?;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// All fields are read before the animal is built, so a bad name is
    /// reported only after the last prompt.
    fn read_animal(&mut self, kind: AnimalKind) -> Result<Box<dyn Animal>> {
        let name = self.ask(NAME_PROMPT)?;
        let age = self.ask_age()?;

        let animal: Box<dyn Animal> = match kind {
            AnimalKind::Lion => {
                let is_alpha = parse_yes_no(&self.ask(ALPHA_PROMPT)?);
                Box::new(Lion::new(&name, age, is_alpha)?)
            }
            AnimalKind::Parrot => Box::new(Parrot::new(&name, age)?),
            AnimalKind::Snake => {
                let is_venomous = parse_yes_no(&self.ask(VENOMOUS_PROMPT)?);
                Box::new(Snake::new(&name, age, is_venomous)?)
            }
        };
        Ok(animal)
    }

    fn ask_age(&mut self) -> Result<i32> {
        loop {
            let raw = self.ask(AGE_PROMPT)?;
            match parse_integer("age", &raw) {
                Ok(age) => return Ok(age),
                Err(e) if self.policy == InputPolicy::Reprompt => {
                    tracing::warn!("{}", e);
                    writeln!(self.output, "{}", INVALID_AGE)?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        self.prompt(prompt)?;
        self.read_line()?.ok_or_else(|| ZooError::InputClosed {
            prompt: prompt.trim_end().to_string(),
        })
    }

    fn prompt(&mut self, prompt: &str) -> Result<()> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        Ok(())
    }

    /// `None` at end of input. The line terminator is stripped and bytes
    /// that are not UTF-8 (e.g. a Latin-1 console) become U+FFFD.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&bytes);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}
