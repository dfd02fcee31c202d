use std::path::Path;

use serde_yaml::{Mapping, Value};
use tracing::{info, warn};

use crate::config::BotConfig;
use crate::rules;
use crate::template::write_template;

pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads `config.yaml` from the working directory.
pub fn load_config() -> eyre::Result<BotConfig> {
    load_config_from(DEFAULT_CONFIG_PATH)
}

/// Reads and validates the config at `path`.
///
/// A missing or unparsable file is replaced with the template and the load
/// still fails, so the operator has a file to edit on first run.
pub fn load_config_from(path: impl AsRef<Path>) -> eyre::Result<BotConfig> {
    let path = path.as_ref();

    let document = match read_document(path) {
        Ok(document) => document,
        Err(reason) => {
            warn!(path = %path.display(), %reason, "config unusable, writing template");
            write_template(path)?;
            eyre::bail!(
                "bad config file or missing, got error {reason} Please edit the {} file",
                path.display()
            );
        }
    };

    let config = rules::validate(document)?;

    info!(
        path = %path.display(),
        ps4_ip = config.ps4_ip(),
        bot_admins = config.bot_admins().len(),
        built_in_saves = config.built_in_saves().len(),
        allow_bot_usage_in_dms = config.allow_bot_usage_in_dms(),
        "config loaded"
    );
    Ok(config)
}

/// `Err` carries "<error type>: <message>" for the template-written error.
fn read_document(path: &Path) -> Result<Mapping, String> {
    let text = std::fs::read_to_string(path).map_err(|err| format!("{:?}: {err}", err.kind()))?;
    let value: Value =
        serde_yaml::from_str(&text).map_err(|err| format!("YamlError: {err}"))?;

    match value {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Err("EmptyDocument: the config file has no keys".to_string()),
        _ => Err("NotAMapping: the top level of the config must be key: value pairs".to_string()),
    }
}
