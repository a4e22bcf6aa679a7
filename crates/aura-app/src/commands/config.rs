//! `aura config` actions: the settings form.

use std::io::Write;
use std::path::Path;

use aura_common::{Event, EventBus};
use aura_config::toml_loader::load_or_create;
use aura_config::{config_to_json, get_value, save_config_to_path, set_value, AuraConfig};
use tracing::info;

use crate::cli::ConfigAction;

/// Run one config action against the file at `path`.
///
/// Show and Set read the file fresh, so an unreadable file is an error
/// rather than a silent swap to defaults. `ConfigSaved` is published after
/// every successful write.
pub fn run<W: Write>(
    action: &ConfigAction,
    path: &Path,
    events: &EventBus,
    out: &mut W,
) -> aura_common::Result<()> {
    match action {
        ConfigAction::Show => {
            let config = load_or_create(path)?;
            writeln!(out, "{}", config_to_json(&config))?;
        }
        ConfigAction::Path => writeln!(out, "{}", path.display())?,
        ConfigAction::Reset => {
            save_config_to_path(&AuraConfig::default(), path)?;
            events.publish(Event::ConfigSaved);
            info!(path = %path.display(), "config reset to defaults");
            writeln!(out, "reset {}", path.display())?;
        }
        ConfigAction::Set { key, value } => {
            let mut config = load_or_create(path)?;
            set_value(&mut config, key, value)?;
            save_config_to_path(&config, path)?;
            events.publish(Event::ConfigSaved);
            info!(%key, "config value updated");
            let shown = get_value(&config, key)
                .map(|v| v.to_string())
                .unwrap_or_else(|| value.clone());
            writeln!(out, "{key} = {shown}")?;
        }
    }
    Ok(())
}
