//! Environment section: the build toolchain and device facts shown on the
//! settings screen and optionally interpolated into prompts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Device permission toggles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PermissionsConfig {
    pub camera: bool,
    pub microphone: bool,
    pub location: bool,
    pub storage: bool,
    pub biometrics: bool,
}

impl PermissionsConfig {
    /// Names of the granted permissions, in declaration order.
    pub fn granted(&self) -> Vec<&'static str> {
        [
            ("camera", self.camera),
            ("microphone", self.microphone),
            ("location", self.location),
            ("storage", self.storage),
            ("biometrics", self.biometrics),
        ]
        .into_iter()
        .filter_map(|(name, on)| on.then_some(name))
        .collect()
    }
}

/// Toolchain and device environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    pub java_home: String,
    pub gradle_home: String,
    pub gradle_version: String,
    pub java_version: String,
    pub jvm_options: String,
    pub environment_variables: BTreeMap<String, String>,
    pub nexus_status: String,
    pub android_version: String,
    /// Android API level (valid range: 21-40).
    pub sdk_level: u32,
    pub permissions: PermissionsConfig,
    /// Valid range: 0-100.
    pub consciousness_level: u32,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        let environment_variables = [
            ("PATH", "$PATH:$JAVA_HOME/bin:$GRADLE_HOME/bin"),
            ("AURA_ENV", "production"),
            ("NEXUS_MODE", "advanced"),
            (
                "GRADLE_OPTS",
                "-Dorg.gradle.daemon=true -Dorg.gradle.parallel=true",
            ),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            java_home: "/usr/lib/jvm/java-21-openjdk-amd64".into(),
            gradle_home: "/opt/gradle/gradle-8.5".into(),
            gradle_version: "8.5".into(),
            java_version: "21.0.2".into(),
            jvm_options: "-Xmx4g -Xms1g -XX:+UseG1GC -XX:+UseStringDeduplication".into(),
            environment_variables,
            nexus_status: "stable".into(),
            android_version: "14".into(),
            sdk_level: 34,
            permissions: PermissionsConfig::default(),
            consciousness_level: 100,
        }
    }
}
