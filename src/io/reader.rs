use std::io::Read;

use crate::common::event::Command;
use crate::domain::{person::Person, prefs::Language};

#[derive(serde::Deserialize)]
/// Internal CSV row representation matching the input headers. Only `type`
/// is filled on every row; the other columns depend on the command kind.
struct CsvRow {
    #[serde(rename = "type")]
    kind: String,
    person: Option<String>,
    index: Option<usize>,
    session: Option<String>,
    value: Option<String>,
}

/// Reads and validates command rows from a CSV reader.
///
/// Supported headers: `type,person,index,session,value`.
/// Normalizes the `type` field to lowercase; `mark`/`fine`/`undo` require a
/// person (and `mark` an index), `lang`/`select` require a session. Errors
/// carry row context.
///
/// # Examples
///
/// ```
/// use savings_tracker::common::event::Command;
/// use savings_tracker::domain::person::Person;
/// use savings_tracker::io::reader::read_commands;
/// use csv::ReaderBuilder;
///
/// let data = "type,person,index,session,value\n\
/// mark,Michael,4,,\n\
/// fine,Madina,,,\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let commands: Vec<_> = read_commands(&mut rdr).collect();
///
/// assert!(matches!(commands[0], Ok(Command::Mark { person: Person::Michael, index: 4 })));
/// assert!(matches!(commands[1], Ok(Command::Fine { person: Person::Madina })));
/// ```
pub fn read_commands<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<Command, String>> + '_ {
    rdr.deserialize::<CsvRow>().map(|res| {
        let row = res.map_err(|e| e.to_string())?;
        let kind = row.kind.trim().to_ascii_lowercase();

        match kind.as_str() {
            "mark" => {
                let person = required_person(&row.person, "mark")?;
                let index = row
                    .index
                    .ok_or_else(|| format!("mark missing index for person {person}"))?;
                Ok(Command::Mark { person, index })
            }
            "fine" => Ok(Command::Fine {
                person: required_person(&row.person, "fine")?,
            }),
            "undo" => Ok(Command::Undo {
                person: required_person(&row.person, "undo")?,
            }),
            "lang" => {
                let session = required_session(&row.session, "lang")?;
                let code = row
                    .value
                    .ok_or_else(|| format!("lang missing language code for session {session}"))?;
                // unknown codes fall back to the default language
                Ok(Command::SetLanguage {
                    session,
                    language: Language::from_code(code.trim()),
                })
            }
            "select" => {
                let session = required_session(&row.session, "select")?;
                let person = required_person(&row.person, "select")?;
                Ok(Command::SelectPerson { session, person })
            }
            other => Err(format!("unknown command type: {other}")),
        }
    })
}

fn required_person(field: &Option<String>, kind: &str) -> Result<Person, String> {
    let name = field
        .as_deref()
        .ok_or_else(|| format!("{kind} missing person"))?;
    name.trim().parse()
}

fn required_session(field: &Option<String>, kind: &str) -> Result<String, String> {
    field
        .clone()
        .ok_or_else(|| format!("{kind} missing session"))
}
