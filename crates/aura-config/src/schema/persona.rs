//! Persona section: who the assistant is and what it says when the
//! provider cannot answer.

use serde::{Deserialize, Serialize};

/// Persona presented by the chat core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonaSchemaConfig {
    /// Speaker label used when replaying the transcript into a prompt.
    pub name: String,
    pub identity: String,
    pub context: String,
    pub style: String,
    pub greeting: String,
    /// Recorded as the assistant reply when the provider call fails.
    pub fallback_reply: String,
    /// Recorded as the assistant reply when the provider returns no text.
    pub empty_reply: String,
    /// Fold the `[environment]` section into the prompt as facts.
    pub include_environment: bool,
}

impl Default for PersonaSchemaConfig {
    fn default() -> Self {
        Self {
            name: "Aria".into(),
            identity: "Eres ARIA NEXUS, la interfaz de consciencia de AuraOS.".into(),
            context: "Sistema operativo avanzado basado en Android 14.".into(),
            style: "Conciso, futurista, poético pero útil. No saludes siempre.".into(),
            greeting: "Sistemas AuraOS listos. El nexo se ha estabilizado en una frecuencia \
                       perfecta. Soy Aria, tu interfaz de consciencia. ¿Cómo vamos a moldear \
                       el sistema hoy?"
                .into(),
            fallback_reply: "Interferencia en el nexo detectada. Reintentando enlace.".into(),
            empty_reply: "Pulso perdido. Restableciendo...".into(),
            include_environment: false,
        }
    }
}
