use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::PathBuf;

use models::BuiltInSave;
use serde_yaml::{Mapping, Value};
use tracing::debug;

use crate::config::{BotConfig, ConfigBuilder};

type Apply = fn(&mut ConfigBuilder, Value) -> eyre::Result<()>;

/// One required top-level key of `config.yaml`.
struct KeyRule {
    key: &'static str,
    /// Example value shipped in the template; leaving it in place counts as unconfigured.
    placeholder: Option<&'static str>,
    /// `built_in_saves:` with nothing under it parses as null and means "no saves".
    may_be_empty: bool,
    apply: Apply,
}

const RULES: &[KeyRule] = &[
    KeyRule {
        key: "discord_token",
        placeholder: Some("MTIxMzAQk2APdMtqdXTtSfJcD2.GaxeZo.SLW6IWM7qdSxyQhCvClXINFJF4AIbF6oJVahrb"),
        may_be_empty: false,
        apply: apply_discord_token,
    },
    KeyRule {
        key: "ssocookie",
        placeholder: Some("glgagbgcSDh3t50ABpfwINS9kfugLPqDY8Lzfz3UabgE2w3OAhss6tWEJCOH54Sm"),
        may_be_empty: false,
        apply: apply_ssocookie,
    },
    KeyRule {
        key: "google_credentials_file",
        placeholder: None,
        may_be_empty: false,
        apply: apply_google_credentials_file,
    },
    KeyRule {
        key: "ps4_ip",
        placeholder: Some("192.168.1.256"),
        may_be_empty: false,
        apply: apply_ps4_ip,
    },
    KeyRule {
        key: "user_id",
        placeholder: Some("1ej71bbd"),
        may_be_empty: false,
        apply: apply_user_id,
    },
    KeyRule {
        key: "bot_admins",
        placeholder: None,
        may_be_empty: false,
        apply: apply_bot_admins,
    },
    KeyRule {
        key: "allow_bot_usage_in_dms",
        placeholder: None,
        may_be_empty: false,
        apply: apply_allow_bot_usage_in_dms,
    },
    KeyRule {
        key: "built_in_saves",
        placeholder: None,
        may_be_empty: true,
        apply: apply_built_in_saves,
    },
];

/// Keys from older releases, with what to do about them.
const DEPRECATED_KEYS: &[(&str, &str)] = &[
    (
        "save_dirs",
        "sacrifice saves are no longer used, delete save_dirs and list any saves you want to offer under built_in_saves",
    ),
    (
        "title_id",
        "the title id is now given per save, delete title_id and put it at the start of each built_in_saves line",
    ),
];

pub(crate) fn unconfigured(key: &str) -> eyre::Report {
    eyre::eyre!("Unconfigured config, unconfigured value {key} or bad config")
}

/// Runs every rule over the document, then rejects deprecated keys.
/// Whatever is left over is kept on the config untouched.
pub(crate) fn validate(mut document: Mapping) -> eyre::Result<BotConfig> {
    let mut builder = ConfigBuilder::default();

    for rule in RULES {
        let value = rule.take(&mut document)?;
        (rule.apply)(&mut builder, value)?;
        debug!(key = rule.key, "config key ok");
    }

    for (key, instructions) in DEPRECATED_KEYS {
        if document.contains_key(*key) {
            eyre::bail!("{key} is deprecated: {instructions}");
        }
    }

    builder.finish(document)
}

impl KeyRule {
    fn take(&self, document: &mut Mapping) -> eyre::Result<Value> {
        let Some(value) = document.remove(self.key) else {
            return Err(unconfigured(self.key));
        };

        let is_blank = match &value {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            _ => false,
        };
        if is_blank && !self.may_be_empty {
            return Err(unconfigured(self.key));
        }

        if let (Some(placeholder), Some(text)) = (self.placeholder, value.as_str()) {
            if text.trim() == placeholder {
                return Err(unconfigured(self.key));
            }
        }

        Ok(value)
    }
}

fn apply_discord_token(builder: &mut ConfigBuilder, value: Value) -> eyre::Result<()> {
    builder.discord_token = Some(scalar_text("discord_token", value)?);
    Ok(())
}

fn apply_ssocookie(builder: &mut ConfigBuilder, value: Value) -> eyre::Result<()> {
    builder.ssocookie = Some(scalar_text("ssocookie", value)?);
    Ok(())
}

fn apply_ps4_ip(builder: &mut ConfigBuilder, value: Value) -> eyre::Result<()> {
    builder.ps4_ip = Some(scalar_text("ps4_ip", value)?);
    Ok(())
}

/// Hex folder names like `12345e10` or `0x1f2e3d4c` read as numbers unless
/// quoted, so only a YAML string is accepted.
fn apply_user_id(builder: &mut ConfigBuilder, value: Value) -> eyre::Result<()> {
    let user_id = match value {
        Value::String(user_id) => user_id,
        other => eyre::bail!(
            "user_id must be quoted text, got {}. Put it in quotes, eg user_id: '1eb71bbd'",
            kind(&other)
        ),
    };
    builder.user_id = Some(user_id.trim().to_string());
    Ok(())
}

fn apply_google_credentials_file(builder: &mut ConfigBuilder, value: Value) -> eyre::Result<()> {
    const KEY: &str = "google_credentials_file";
    let path = PathBuf::from(scalar_text(KEY, value)?);

    let parsed = std::fs::read_to_string(&path)
        .map_err(|err| format!("{:?}: {err}", err.kind()))
        .and_then(|text| {
            serde_json::from_str::<serde_json::Value>(&text)
                .map_err(|err| format!("{:?}: {err}", err.classify()))
        });
    if let Err(reason) = parsed {
        eyre::bail!(
            "Could not open {KEY}: {} or not valid {KEY}, got error {reason}",
            path.display()
        );
    }

    builder.google_credentials_file = Some(path);
    Ok(())
}

fn apply_bot_admins(builder: &mut ConfigBuilder, value: Value) -> eyre::Result<()> {
    const KEY: &str = "bot_admins";
    let Value::Sequence(entries) = value else {
        return Err(unconfigured(KEY));
    };
    if entries.is_empty() {
        return Err(unconfigured(KEY));
    }

    let admins = entries
        .iter()
        .map(Value::as_u64)
        .collect::<Option<Vec<u64>>>()
        .ok_or_else(|| unconfigured(KEY))?;

    builder.bot_admins = Some(admins);
    Ok(())
}

fn apply_allow_bot_usage_in_dms(builder: &mut ConfigBuilder, value: Value) -> eyre::Result<()> {
    let allowed = match value {
        Value::Bool(allowed) => allowed,
        other => eyre::bail!(
            "allow_bot_usage_in_dms must be a boolean (true or false), got {}",
            kind(&other)
        ),
    };
    builder.allow_bot_usage_in_dms = Some(allowed);
    Ok(())
}

fn apply_built_in_saves(builder: &mut ConfigBuilder, value: Value) -> eyre::Result<()> {
    let lines = match value {
        Value::Null => Vec::new(),
        Value::Sequence(lines) => lines,
        other => eyre::bail!(
            "built_in_saves must be a list of save lines, got {}",
            kind(&other)
        ),
    };

    let saves = lines
        .iter()
        .map(parse_save_line)
        .collect::<eyre::Result<Vec<_>>>()?;

    builder.built_in_saves = Some(index_saves(saves)?);
    Ok(())
}

fn parse_save_line(entry: &Value) -> eyre::Result<BuiltInSave> {
    let Some(line) = entry.as_str() else {
        eyre::bail!(
            "bad built_in_saves line {entry:?}: expected a line of text, got {}",
            kind(entry)
        );
    };
    BuiltInSave::from_line(line).map_err(|err| eyre::eyre!("bad built_in_saves line {line:?}: {err}"))
}

/// Every pair of saves must differ in name and in (title id, save dir).
fn index_saves(saves: Vec<BuiltInSave>) -> eyre::Result<BTreeMap<String, BuiltInSave>> {
    {
        let mut names = HashSet::new();
        let mut by_location: HashMap<(&str, &str), &str> = HashMap::new();

        for save in &saves {
            if !names.insert(save.name()) {
                eyre::bail!(
                    "duplicate built_in_saves name {:?}, every built-in save needs its own name",
                    save.name()
                );
            }
            if let Some(other) = by_location.insert(save.location(), save.name()) {
                eyre::bail!(
                    "duplicate built_in_saves save {} {} is listed as both {other:?} and {:?}",
                    save.title_id(),
                    save.save_dir(),
                    save.name()
                );
            }
        }
    }

    Ok(saves
        .into_iter()
        .map(|save| (save.name().to_string(), save))
        .collect())
}

fn scalar_text(key: &str, value: Value) -> eyre::Result<String> {
    match value {
        Value::String(text) => Ok(text.trim().to_string()),
        Value::Number(number) if number.is_i64() || number.is_u64() => Ok(number.to_string()),
        other => eyre::bail!("{key} must be text, got {}", kind(&other)),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "nothing",
        Value::Bool(_) => "a boolean",
        Value::Number(n) if n.is_f64() => "a decimal number",
        Value::Number(_) => "an integer",
        Value::String(_) => "text",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
