/// Field separator of the stored record format. Titles and descriptions
/// must not contain it; the operations layer rejects them on input.
pub const SEPARATOR: char = '|';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Incomplete,
    Complete,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Incomplete => "Incomplete",
            Status::Complete => "Complete",
        }
    }

    /// Any stored value other than the literal `Complete` reads as
    /// incomplete, matching the default for a missing status field.
    fn from_field(field: &str) -> Status {
        if field == "Complete" {
            Status::Complete
        } else {
            Status::Incomplete
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub status: Status,
}

impl Task {
    /// One record per line: `id|title|description|status`.
    pub fn encode(&self) -> String {
        format!(
            "{}{sep}{}{sep}{}{sep}{}",
            self.id,
            self.title,
            self.description,
            self.status.as_str(),
            sep = SEPARATOR,
        )
    }

    /// Decodes a stored line. Returns `None` for anything that is not a
    /// task: fewer than three fields, or an id that is not an integer.
    /// Callers skip such lines rather than failing the whole load.
    pub fn decode(line: &str) -> Option<Task> {
        let fields: Vec<&str> = line.split(SEPARATOR).collect();
        if fields.len() < 3 {
            return None;
        }
        let id = fields[0].parse().ok()?;
        let status = match fields.get(3) {
            Some(field) => Status::from_field(field),
            None => Status::Incomplete,
        };
        Some(Task {
            id,
            title: fields[1].to_string(),
            description: fields[2].to_string(),
            status,
        })
    }
}
