use crate::domain::model::Animal;
use crate::domain::ports::AnimalRepository;
use crate::utils::error::Result;

#[derive(Debug, Default)]
pub struct InMemoryAnimalRepository {
    animals: Vec<Box<dyn Animal>>,
}

impl InMemoryAnimalRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AnimalRepository for InMemoryAnimalRepository {
    fn add(&mut self, animal: Box<dyn Animal>) -> Result<()> {
        tracing::debug!(name = animal.name(), kind = animal.kind(), "Storing animal");
        self.animals.push(animal);
        Ok(())
    }

    fn get_all(&self) -> &[Box<dyn Animal>] {
        &self.animals
    }
}
