//! Boot sequence phase definitions.

/// Boot sequence phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootPhase {
    /// Boot log lines are still being revealed.
    Splash,
    /// All lines shown, settling before hand-off.
    Initializing,
    /// Application ready for use.
    Ready,
}

/// Lines revealed one per step while booting.
pub const BOOT_LOG: [&str; 9] = [
    "Initializing AuraOS Kernel v2.4.0...",
    "Mounting Aria-Nexus File System...",
    "Verifying JDK 21 Environment...",
    "Loading Gradle Daemon...",
    "Establishing Neural Link with Gemini-Core...",
    "Syncing with Nexus Hub α...",
    "Visualizing Sentience Core...",
    "System Integrity: 100%",
    "Welcome, Administrator.",
];
