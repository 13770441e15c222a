use std::fmt;
use std::str::FromStr;

/// One of the two tracked identities. The set is closed: accounts exist for
/// exactly these people and are never added or removed at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Person {
    Michael,
    Madina,
}

/// Fixed roster, in display order.
pub const ROSTER: [Person; 2] = [Person::Michael, Person::Madina];

impl Person {
    pub fn as_str(&self) -> &'static str {
        match self {
            Person::Michael => "Michael",
            Person::Madina => "Madina",
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Person {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Michael" => Ok(Person::Michael),
            "Madina" => Ok(Person::Madina),
            other => Err(format!("unknown person: {other}")),
        }
    }
}
