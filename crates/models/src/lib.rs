use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use string_helpers::is_ps4_title_id;

/// A save that ships with the bot, listed in `built_in_saves` as one line:
/// `TITLEID SAVEDIR unique_name free text description...`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BuiltInSave {
    title_id: String,
    save_dir: String,
    name: String,
    description: String,
}

impl BuiltInSave {
    /// Splits on any whitespace; the description is whatever follows the
    /// name, rejoined with single spaces, and may be empty.
    pub fn from_line(line: &str) -> eyre::Result<Self> {
        let mut words = line.split_whitespace();
        let (Some(title_id), Some(save_dir), Some(name)) = (words.next(), words.next(), words.next())
        else {
            eyre::bail!("expected at least TITLEID SAVEDIR unique_name");
        };
        eyre::ensure!(
            is_ps4_title_id(title_id),
            "{title_id} is not a valid title id (expected CUSA followed by 5 digits)"
        );

        Ok(Self {
            title_id: title_id.to_string(),
            save_dir: save_dir.to_string(),
            name: name.to_string(),
            description: words.collect::<Vec<_>>().join(" "),
        })
    }

    pub fn title_id(&self) -> &str {
        &self.title_id
    }

    pub fn save_dir(&self) -> &str {
        &self.save_dir
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The (title id, save directory) pair identifying the save on the console.
    pub fn location(&self) -> (&str, &str) {
        (&self.title_id, &self.save_dir)
    }
}

impl FromStr for BuiltInSave {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_line(s)
    }
}

impl fmt::Display for BuiltInSave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.title_id, self.save_dir, self.name)?;
        if !self.description.is_empty() {
            write!(f, " {}", self.description)?;
        }
        Ok(())
    }
}
