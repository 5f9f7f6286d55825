use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_non_negative};

/// Identity fields shared by every animal. Both setters validate, and
/// construction goes through them too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalProfile {
    name: String,
    age: u32,
}

impl AnimalProfile {
    pub fn new(name: &str, age: i32) -> Result<Self> {
        Ok(Self {
            name: validate_non_empty_string("name", name)?,
            age: validate_non_negative("age", age)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn set_name(&mut self, name: &str) -> Result<()> {
        self.name = validate_non_empty_string("name", name)?;
        Ok(())
    }

    pub fn set_age(&mut self, age: i32) -> Result<()> {
        self.age = validate_non_negative("age", age)?;
        Ok(())
    }
}

/// Optional flight capability, queried through [`Animal::as_flier`].
pub trait Flier {
    fn fly(&self) -> String;
}

pub trait Animal: std::fmt::Debug {
    fn profile(&self) -> &AnimalProfile;
    fn profile_mut(&mut self) -> &mut AnimalProfile;

    /// Variant name as shown in listings.
    fn kind(&self) -> &'static str;
    fn produce_sound(&self) -> &'static str;

    fn as_flier(&self) -> Option<&dyn Flier> {
        None
    }

    fn name(&self) -> &str {
        self.profile().name()
    }

    fn age(&self) -> u32 {
        self.profile().age()
    }

    fn set_name(&mut self, name: &str) -> Result<()> {
        self.profile_mut().set_name(name)
    }

    fn set_age(&mut self, age: i32) -> Result<()> {
        self.profile_mut().set_age(age)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lion {
    profile: AnimalProfile,
    is_alpha: bool,
}

impl Lion {
    pub fn new(name: &str, age: i32, is_alpha: bool) -> Result<Self> {
        Ok(Self {
            profile: AnimalProfile::new(name, age)?,
            is_alpha,
        })
    }

    pub fn is_alpha(&self) -> bool {
        self.is_alpha
    }
}

impl Animal for Lion {
    fn profile(&self) -> &AnimalProfile {
        &self.profile
    }

    fn profile_mut(&mut self) -> &mut AnimalProfile {
        &mut self.profile
    }

    fn kind(&self) -> &'static str {
        "Lion"
    }

    fn produce_sound(&self) -> &'static str {
        "Roar"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parrot {
    profile: AnimalProfile,
    vocabulary: Vec<String>,
}

impl Parrot {
    pub fn new(name: &str, age: i32) -> Result<Self> {
        Ok(Self {
            profile: AnimalProfile::new(name, age)?,
            vocabulary: Vec::new(),
        })
    }

    /// Blank words are dropped. Unlike plain filtering, the kept words are
    /// also trimmed, since each one goes through [`Parrot::teach`].
    pub fn with_vocabulary<I, S>(name: &str, age: i32, words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parrot = Self::new(name, age)?;
        for word in words {
            parrot.teach(word.as_ref());
        }
        Ok(parrot)
    }

    /// Appends the trimmed word. Blank input is ignored.
    pub fn teach(&mut self, word: &str) {
        let word = word.trim();
        if !word.is_empty() {
            self.vocabulary.push(word.to_string());
        }
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }
}

impl Flier for Parrot {
    fn fly(&self) -> String {
        format!("{} flaps its wings and takes off.", self.name())
    }
}

impl Animal for Parrot {
    fn profile(&self) -> &AnimalProfile {
        &self.profile
    }

    fn profile_mut(&mut self) -> &mut AnimalProfile {
        &mut self.profile
    }

    fn kind(&self) -> &'static str {
        "Parrot"
    }

    fn produce_sound(&self) -> &'static str {
        "Squawk"
    }

    fn as_flier(&self) -> Option<&dyn Flier> {
        Some(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    profile: AnimalProfile,
    is_venomous: bool,
}

impl Snake {
    pub fn new(name: &str, age: i32, is_venomous: bool) -> Result<Self> {
        Ok(Self {
            profile: AnimalProfile::new(name, age)?,
            is_venomous,
        })
    }

    pub fn is_venomous(&self) -> bool {
        self.is_venomous
    }
}

impl Animal for Snake {
    fn profile(&self) -> &AnimalProfile {
        &self.profile
    }

    fn profile_mut(&mut self) -> &mut AnimalProfile {
        &mut self.profile
    }

    fn kind(&self) -> &'static str {
        "Snake"
    }

    fn produce_sound(&self) -> &'static str {
        "Hiss"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ZooError;
    use rstest::rstest;

    fn build(kind: &str, name: &str, age: i32) -> Result<Box<dyn Animal>> {
        Ok(match kind {
            "Lion" => Box::new(Lion::new(name, age, true)?),
            "Parrot" => Box::new(Parrot::new(name, age)?),
            _ => Box::new(Snake::new(name, age, false)?),
        })
    }

    #[rstest]
    #[case("Lion", "Roar")]
    #[case("Parrot", "Squawk")]
    #[case("Snake", "Hiss")]
    fn construction_keeps_trimmed_name_and_age(#[case] kind: &str, #[case] sound: &str) {
        let animal = build(kind, "  Nala  ", 4).unwrap();
        assert_eq!(animal.name(), "Nala");
        assert_eq!(animal.age(), 4);
        assert_eq!(animal.kind(), kind);
        assert_eq!(animal.produce_sound(), sound);
    }

    #[rstest]
    fn blank_name_is_rejected(
        #[values("Lion", "Parrot", "Snake")] kind: &str,
        #[values("", " ", "\t\n")] name: &str,
    ) {
        assert!(matches!(
            build(kind, name, 1),
            Err(ZooError::Validation { .. })
        ));
    }

    #[rstest]
    fn negative_age_is_rejected(#[values("Lion", "Parrot", "Snake")] kind: &str) {
        assert!(matches!(build(kind, "Kaa", -1), Err(ZooError::Range { .. })));
    }

    #[test]
    fn zero_age_is_allowed() {
        assert_eq!(Snake::new("Kaa", 0, true).unwrap().age(), 0);
    }

    #[test]
    fn setters_validate_like_construction() {
        let mut lion = Lion::new("Leo", 5, true).unwrap();

        assert!(lion.set_name("   ").is_err());
        assert!(lion.set_age(-4).is_err());
        assert_eq!(lion.name(), "Leo");
        assert_eq!(lion.age(), 5);

        lion.set_name(" Simba ").unwrap();
        lion.set_age(6).unwrap();
        assert_eq!(lion.name(), "Simba");
        assert_eq!(lion.age(), 6);
    }

    #[test]
    fn variant_flags_are_exposed() {
        assert!(Lion::new("Leo", 5, true).unwrap().is_alpha());
        assert!(!Lion::new("Leo", 5, false).unwrap().is_alpha());
        assert!(Snake::new("Kaa", 10, true).unwrap().is_venomous());
    }

    #[test]
    fn teach_appends_trimmed_words_and_skips_blanks() {
        let mut parrot = Parrot::new("Polly", 2).unwrap();
        parrot.teach("polly");
        assert_eq!(parrot.vocabulary(), ["polly"]);

        parrot.teach("  ");
        parrot.teach("");
        assert_eq!(parrot.vocabulary(), ["polly"]);

        parrot.teach(" cracker ");
        assert_eq!(parrot.vocabulary(), ["polly", "cracker"]);
    }

    #[test]
    fn initial_vocabulary_skips_blank_words() {
        let parrot = Parrot::with_vocabulary("Polly", 2, ["hello", " ", "bye "]).unwrap();
        assert_eq!(parrot.vocabulary(), ["hello", "bye"]);

        let parrot = Parrot::with_vocabulary("Polly", 2, ["  good morning  ", ""]).unwrap();
        assert_eq!(parrot.vocabulary(), ["good morning"]);
    }

    #[test]
    fn only_parrot_can_fly() {
        let parrot = Parrot::new("Polly", 2).unwrap();
        let flier = parrot.as_flier().expect("parrot flies");
        assert_eq!(flier.fly(), "Polly flaps its wings and takes off.");

        assert!(Lion::new("Leo", 5, true).unwrap().as_flier().is_none());
        assert!(Snake::new("Kaa", 10, true).unwrap().as_flier().is_none());
    }

    #[test]
    fn flight_line_follows_renames() {
        let mut parrot = Parrot::new("Polly", 2).unwrap();
        parrot.set_name("Kiki").unwrap();
        assert_eq!(
            parrot.as_flier().unwrap().fly(),
            "Kiki flaps its wings and takes off."
        );
    }
}
