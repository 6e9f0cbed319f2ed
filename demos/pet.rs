use std::fmt;

use objscope::Inspect;

#[derive(Debug, thiserror::Error)]
pub enum PetError {
    #[error("Age can't be negative: {0}")]
    NegativeAge(i32),
}

#[derive(Clone, Default, Inspect)]
#[inspect(implements(Clone, Default, fmt::Display), members)]
pub struct Pet {
    age: i32,
    name: String,
    children: Vec<Pet>,
}

#[objscope::members]
#[allow(dead_code)]
impl Pet {
    const SERIAL_VERSION: u64 = 1;

    pub fn new(age: i32, name: &str) -> Result<Self, PetError> {
        let mut pet = Pet::default();
        pet.set_age(age)?;
        pet.set_name(name.to_string());
        Ok(pet)
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn set_age(&mut self, age: i32) -> Result<(), PetError> {
        if age < 0 {
            return Err(PetError::NegativeAge(age));
        }
        self.age = age;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub fn children(&self) -> &[Pet] {
        &self.children
    }

    pub fn set_children(&mut self, children: Vec<Pet>) {
        self.children = children;
    }

    fn do_something(&self, _the_something: &str) {}
}

impl fmt::Display for Pet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Name = {}, Age = {}]", self.name, self.age)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let mut cat = Pet::new(7, "Cat")?;
    cat.set_children(vec![
        Pet::new(1, "little kitty")?,
        Pet::new(2, "bigger kitty")?,
    ]);

    objscope::print_info(Some(&cat))?;
    Ok(())
}
