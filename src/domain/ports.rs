use crate::domain::model::Animal;
use crate::utils::error::Result;

/// Ordered store of every animal in the zoo. Insertion order is the listing order.
pub trait AnimalRepository {
    fn add(&mut self, animal: Box<dyn Animal>) -> Result<()>;

    /// Read-only view in insertion order.
    fn get_all(&self) -> &[Box<dyn Animal>];
}
