use std::fs;
use std::path::{
  Path,
  PathBuf
};

use serde::{
  Deserialize,
  Serialize
};
use tracing::{
  debug,
  info,
  warn
};

use crate::weekday::WeekdayIndex;

const SETTINGS_FILE: &str =
  "settings.toml";
const SETTINGS_DIR: &str = "firstday";
const SETTINGS_ENV_VAR: &str =
  "FIRSTDAY_SETTINGS";
const PREFERENCE_ENV_VAR: &str =
  "FIRSTDAY_WEEK_STARTS_ON";

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
  Default
)]
#[serde(rename_all = "lowercase")]
pub enum WeekStartPreference {
  #[default]
  Automatic,
  Saturday,
  Sunday,
  Monday
}

impl WeekStartPreference {
  pub fn parse(
    raw: &str
  ) -> Option<Self> {
    match raw
      .trim()
      .to_ascii_lowercase()
      .as_str()
    {
      | "automatic" | "1" => {
        Some(Self::Automatic)
      }
      | "saturday" | "2" => {
        Some(Self::Saturday)
      }
      | "sunday" | "3" => {
        Some(Self::Sunday)
      }
      | "monday" | "4" => {
        Some(Self::Monday)
      }
      | _ => None
    }
  }

  pub fn fixed_day(
    self
  ) -> Option<WeekdayIndex> {
    match self {
      | Self::Saturday => {
        Some(WeekdayIndex::SATURDAY)
      }
      | Self::Sunday => {
        Some(WeekdayIndex::SUNDAY)
      }
      | Self::Monday => {
        Some(WeekdayIndex::MONDAY)
      }
      | Self::Automatic => None
    }
  }
}

#[derive(
  Debug, Clone, Copy, Default
)]
pub struct UserSettings {
  pub week_starts_on:
    WeekStartPreference
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawPreference {
  Code(i64),
  Name(String)
}

#[derive(Debug, Deserialize)]
struct SettingsFile {
  #[serde(rename = "week-starts-on")]
  week_starts_on:
    Option<RawPreference>,
  calendar: Option<CalendarSection>
}

#[derive(Debug, Deserialize)]
struct CalendarSection {
  #[serde(rename = "week-starts-on")]
  week_starts_on:
    Option<RawPreference>
}

impl UserSettings {
  #[tracing::instrument(skip(
    override_path
  ))]
  pub fn load(
    override_path: Option<&Path>
  ) -> Self {
    if let Ok(raw) = std::env::var(
      PREFERENCE_ENV_VAR
    ) {
      match WeekStartPreference::parse(
        &raw
      ) {
        | Some(pref) => {
          info!(
            source = PREFERENCE_ENV_VAR,
            preference = ?pref,
            "week-start preference from environment"
          );
          return UserSettings {
            week_starts_on: pref
          };
        }
        | None => {
          warn!(
            source = PREFERENCE_ENV_VAR,
            value = %raw,
            "unrecognized week-start value; ignoring"
          );
        }
      }
    }

    if let Some(path) =
      settings_path(override_path)
      && let Some(pref) =
        load_from_file(&path)
    {
      return UserSettings {
        week_starts_on: pref
      };
    }

    debug!(
      "using default week-start \
       settings"
    );
    UserSettings::default()
  }
}

fn settings_path(
  override_path: Option<&Path>
) -> Option<PathBuf> {
  if let Some(path) = override_path {
    return Some(path.to_path_buf());
  }

  if let Ok(raw) =
    std::env::var(SETTINGS_ENV_VAR)
  {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
      return Some(PathBuf::from(
        trimmed
      ));
    }
  }

  dirs::config_dir().map(|dir| {
    dir
      .join(SETTINGS_DIR)
      .join(SETTINGS_FILE)
  })
}

fn load_from_file(
  path: &PathBuf
) -> Option<WeekStartPreference> {
  if !path.exists() {
    debug!(
      file = %path.display(),
      "settings file not found"
    );
    return None;
  }

  let raw = match fs::read_to_string(
    path
  ) {
    | Ok(raw) => raw,
    | Err(err) => {
      warn!(
        file = %path.display(),
        error = %err,
        "failed reading settings file"
      );
      return None;
    }
  };

  let pref =
    parse_settings_str(&raw);
  match pref {
    | Some(pref) => {
      info!(
        file = %path.display(),
        preference = ?pref,
        "week-start preference from settings file"
      );
      Some(pref)
    }
    | None => {
      warn!(
        file = %path.display(),
        "settings file had no usable week-start value"
      );
      None
    }
  }
}

fn parse_settings_str(
  raw: &str
) -> Option<WeekStartPreference> {
  let parsed = match toml::from_str::<
    SettingsFile
  >(raw)
  {
    | Ok(parsed) => parsed,
    | Err(err) => {
      warn!(
        error = %err,
        "failed parsing settings file"
      );
      return None;
    }
  };

  let value =
    parsed.week_starts_on.or_else(
      || {
        parsed.calendar.and_then(
          |section| {
            section.week_starts_on
          }
        )
      }
    )?;
  interpret_raw(value)
}

fn interpret_raw(
  raw: RawPreference
) -> Option<WeekStartPreference> {
  match raw {
    | RawPreference::Code(code) => {
      match code {
        | 1 => Some(
          WeekStartPreference::Automatic
        ),
        | 2 => Some(
          WeekStartPreference::Saturday
        ),
        | 3 => Some(
          WeekStartPreference::Sunday
        ),
        | 4 => Some(
          WeekStartPreference::Monday
        ),
        | _ => {
          warn!(
            code,
            "unknown week-start code"
          );
          None
        }
      }
    }
    | RawPreference::Name(name) => {
      WeekStartPreference::parse(
        &name
      )
    }
  }
}
