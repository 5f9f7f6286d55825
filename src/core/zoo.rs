use crate::domain::model::Animal;
use crate::domain::ports::AnimalRepository;
use crate::utils::error::Result;
use std::io::Write;

pub struct ZooService<R: AnimalRepository> {
    repo: R,
}

impl<R: AnimalRepository> ZooService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn add_animal(&mut self, animal: Box<dyn Animal>) -> Result<()> {
        tracing::info!(
            name = animal.name(),
            kind = animal.kind(),
            age = animal.age(),
            "Adding animal"
        );
        self.repo.add(animal)
    }

    /// One line per animal, in insertion order.
    pub fn announce_all<W: Write>(&self, out: &mut W) -> Result<()> {
        let animals = self.repo.get_all();
        tracing::debug!("Announcing {} animals", animals.len());

        for animal in animals {
            writeln!(
                out,
                "{} ({}, {} v) says: {}",
                animal.name(),
                animal.kind(),
                animal.age(),
                animal.produce_sound()
            )?;
        }
        Ok(())
    }

    /// Flight line for every animal that can fly, in insertion order.
    pub fn show_fliers<W: Write>(&self, out: &mut W) -> Result<()> {
        let fliers = self
            .repo
            .get_all()
            .iter()
            .filter_map(|animal| animal.as_flier());

        for flier in fliers {
            writeln!(out, "{}", flier.fly())?;
        }
        Ok(())
    }
}
