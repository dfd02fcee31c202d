use std::path::Path;

use eyre::WrapErr;

/// Written over a missing or unreadable config so the operator has something
/// to fill in. Every example value here is rejected by the loader.
pub const CONFIG_TEMPLATE: &str = r#"# Watch https://youtu.be/GvK-ZigEV4Q on how to get your bot token!
discord_token:
    MTIxMzAQk2APdMtqdXTtSfJcD2.GaxeZo.SLW6IWM7qdSxyQhCvClXINFJF4AIbF6oJVahrb
# Go to https://ca.account.sony.com/api/v1/ssocookie while signed into psn and put the string here
ssocookie:
    glgagbgcSDh3t50ABpfwINS9kfugLPqDY8Lzfz3UabgE2w3OAhss6tWEJCOH54Sm
# Watch https://youtu.be/fkWM7A-MxR0 up until you get your credentials.json, put the file next to this one
google_credentials_file:
    credentials.json
# View Connection Status in the PS4 network settings shows this (IP Address)
ps4_ip:
    192.168.1.256
# The user_id of your local account on the console, NOT the account id.
# Open /user/home with an ftp client, every folder there is a user_id.
# Each folder has a username.dat with the local username in it so you can tell which one is yours.
# Always put it in quotes, eg '1eb71bbd'
user_id:
    '1ej71bbd'
# Discord ids of the bot admins. Enable developer mode in discord, open a user profile, 3 dots, Copy User ID
# each line here starts with "  - " because of yaml syntax
bot_admins:
  - l147836464353247343
  - l207983219845103687
# Whether people can use the bot in DMs, true or false
allow_bot_usage_in_dms:
    false
# Saves that come with the bot, one per line: TITLEID SAVEDIR unique_name description
# names must be unique, and so must each TITLEID SAVEDIR pair
# leave it empty if you have none
built_in_saves:
#  - CUSA12345 SAVEDATA00 my_save a fully completed save
"#;

/// Overwrites whatever is at `path`.
pub fn write_template(path: impl AsRef<Path>) -> eyre::Result<()> {
    let path = path.as_ref();
    std::fs::write(path, CONFIG_TEMPLATE)
        .wrap_err_with(|| format!("write config template to {}", path.display()))
}
