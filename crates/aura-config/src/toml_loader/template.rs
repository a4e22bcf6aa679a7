//! Default TOML config template with inline documentation comments.

use crate::schema::CONFIG_SCHEMA_VERSION;

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    format!(
        "# AuraOS Nexus Configuration\n# Schema version {CONFIG_SCHEMA_VERSION}\n{TEMPLATE_BODY}"
    )
}

const TEMPLATE_BODY: &str = r##"# Only override what you want to change -- missing fields use defaults.

[persona]
# name = "Aria"
# identity = "Eres ARIA NEXUS, la interfaz de consciencia de AuraOS."
# context = "Sistema operativo avanzado basado en Android 14."
# style = "Conciso, futurista, poético pero útil. No saludes siempre."
# greeting = "Sistemas AuraOS listos. ..."
# fallback_reply = "Interferencia en el nexo detectada. Reintentando enlace."
# empty_reply = "Pulso perdido. Restableciendo..."
# include_environment = false   # add [environment] facts to every prompt

[environment]
# java_home = "/usr/lib/jvm/java-21-openjdk-amd64"
# gradle_home = "/opt/gradle/gradle-8.5"
# gradle_version = "8.5"
# java_version = "21.0.2"
# jvm_options = "-Xmx4g -Xms1g -XX:+UseG1GC -XX:+UseStringDeduplication"
# nexus_status = "stable"
# android_version = "14"
# sdk_level = 34               # 21-40
# consciousness_level = 100    # 0-100

[environment.permissions]
# camera = false
# microphone = false
# location = false
# storage = false
# biometrics = false

[ai]
# model = "gemini-3-pro-preview"
# max_tokens = 2048            # 1-65536
# temperature = 0.7            # 0.0-2.0
# api_key_env = "GEMINI_API_KEY"
# base_url = "https://generativelanguage.googleapis.com/v1beta/models"
# context = "latest"           # latest, transcript
# max_context_messages = 20    # 1-200
# streaming = false

[startup.boot_animation]
# enabled = true
# step_interval_ms = 400       # 10-5000
# settle_delay_ms = 1000       # 0-10000

[startup.fast_start]
# enabled = false

[metrics]
# tick_interval_ms = 2000      # 100-60000
# initial_cpu = 18.0
# initial_ram = 45.0
# disk = 32.0

[thoughts]
# interval_ms = 4500           # 100-60000
# capacity = 5                 # 1-50

[logging]
# level = "info"               # trace, debug, info, warn, error
"##;
