use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use models::BuiltInSave;
use serde_yaml::Mapping;

/// Validated contents of `config.yaml`. Built once at startup and only read
/// afterwards.
#[derive(Clone)]
pub struct BotConfig {
    discord_token: String,
    ssocookie: String,
    google_credentials_file: PathBuf,
    ps4_ip: String,
    user_id: String,
    bot_admins: Vec<u64>,
    allow_bot_usage_in_dms: bool,
    built_in_saves: BTreeMap<String, BuiltInSave>,
    extra: Mapping,
}

impl BotConfig {
    pub fn discord_token(&self) -> &str {
        &self.discord_token
    }

    pub fn ssocookie(&self) -> &str {
        &self.ssocookie
    }

    pub fn google_credentials_file(&self) -> &Path {
        &self.google_credentials_file
    }

    pub fn ps4_ip(&self) -> &str {
        &self.ps4_ip
    }

    /// Local console account id (the folder name under `/user/home`), not the PSN account id.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn bot_admins(&self) -> &[u64] {
        &self.bot_admins
    }

    pub fn is_bot_admin(&self, discord_user_id: u64) -> bool {
        self.bot_admins.contains(&discord_user_id)
    }

    pub fn allow_bot_usage_in_dms(&self) -> bool {
        self.allow_bot_usage_in_dms
    }

    /// Keyed by each save's unique name.
    pub fn built_in_saves(&self) -> &BTreeMap<String, BuiltInSave> {
        &self.built_in_saves
    }

    pub fn built_in_save(&self, name: &str) -> Option<&BuiltInSave> {
        self.built_in_saves.get(name)
    }

    /// Top-level keys the loader does not interpret, kept as written.
    pub fn extra(&self) -> &Mapping {
        &self.extra
    }
}

impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("discord_token", &"<redacted>")
            .field("ssocookie", &"<redacted>")
            .field("google_credentials_file", &self.google_credentials_file)
            .field("ps4_ip", &self.ps4_ip)
            .field("user_id", &self.user_id)
            .field("bot_admins", &self.bot_admins)
            .field("allow_bot_usage_in_dms", &self.allow_bot_usage_in_dms)
            .field("built_in_saves", &self.built_in_saves)
            .field("extra", &self.extra)
            .finish()
    }
}

#[derive(Debug, Default)]
pub(crate) struct ConfigBuilder {
    pub(crate) discord_token: Option<String>,
    pub(crate) ssocookie: Option<String>,
    pub(crate) google_credentials_file: Option<PathBuf>,
    pub(crate) ps4_ip: Option<String>,
    pub(crate) user_id: Option<String>,
    pub(crate) bot_admins: Option<Vec<u64>>,
    pub(crate) allow_bot_usage_in_dms: Option<bool>,
    pub(crate) built_in_saves: Option<BTreeMap<String, BuiltInSave>>,
}

impl ConfigBuilder {
    pub(crate) fn finish(self, extra: Mapping) -> eyre::Result<BotConfig> {
        Ok(BotConfig {
            discord_token: require(self.discord_token, "discord_token")?,
            ssocookie: require(self.ssocookie, "ssocookie")?,
            google_credentials_file: require(
                self.google_credentials_file,
                "google_credentials_file",
            )?,
            ps4_ip: require(self.ps4_ip, "ps4_ip")?,
            user_id: require(self.user_id, "user_id")?,
            bot_admins: require(self.bot_admins, "bot_admins")?,
            allow_bot_usage_in_dms: require(
                self.allow_bot_usage_in_dms,
                "allow_bot_usage_in_dms",
            )?,
            built_in_saves: require(self.built_in_saves, "built_in_saves")?,
            extra,
        })
    }
}

fn require<T>(value: Option<T>, key: &str) -> eyre::Result<T> {
    value.ok_or_else(|| crate::rules::unconfigured(key))
}
