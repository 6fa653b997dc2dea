use std::fmt;

// NOTE:
// Profiles are mutually exclusive deployments. One is picked at startup
// and stays fixed for the lifetime of the process.

pub const PROFILE_NAMES: &[&str] = &["full", "balanced", "compact"];

const DEFAULT_PROFILE: PromptProfile = PromptProfile::Balanced;

const QUICK_INSTRUCTION: &str = "\n\nIMPORTANT: Provide a QUICK OVERVIEW. Use the structured format with bold labels and bullets, but keep each explanation to 1 sentence. Be concise and focus only on essentials.";

const BALANCED_INSTRUCTION: &str = "\n\nIMPORTANT: Provide a BALANCED analysis. Use the full structured format with bold labels, bullets, and numbers. Keep most explanations to 1-2 sentences - be helpful but not overwhelming. Reserve longer explanations (2-3 sentences) only for the most complex or important points.";

const COMPREHENSIVE_INSTRUCTION: &str = "\n\nIMPORTANT: Provide a COMPREHENSIVE analysis. Use the full structured format with bold labels, bullets, and numbers, and complete every section in rich detail.";

macro_rules! prompt_file {
    ($name:literal) => {
        include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/prompts/",
            $name,
            ".txt"
        ))
    };
}

static FULL_TEMPLATE: &str = prompt_file!("exegesis_full");
static COMPACT_TEMPLATE: &str = prompt_file!("exegesis_compact");

/// Verbosity requested by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Quick,
    Default,
}

impl Mode {
    /// Only the exact string `"quick"` selects the abbreviated output.
    /// Anything else, including no mode at all, runs at full depth.
    pub fn from_request(mode: Option<&str>) -> Self {
        match mode {
            Some("quick") => Mode::Quick,
            _ => Mode::Default,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptProfile {
    Full,
    Balanced,
    Compact,
}

impl Default for PromptProfile {
    fn default() -> Self {
        DEFAULT_PROFILE
    }
}

impl PromptProfile {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "full" => Some(PromptProfile::Full),
            "balanced" => Some(PromptProfile::Balanced),
            "compact" => Some(PromptProfile::Compact),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PromptProfile::Full => "full",
            PromptProfile::Balanced => "balanced",
            PromptProfile::Compact => "compact",
        }
    }

    pub fn system_prompt(&self) -> &'static str {
        match self {
            PromptProfile::Full | PromptProfile::Balanced => FULL_TEMPLATE,
            PromptProfile::Compact => COMPACT_TEMPLATE,
        }
    }

    /// Output token ceiling sent upstream.
    pub fn max_tokens(&self) -> u32 {
        match self {
            PromptProfile::Full | PromptProfile::Balanced => 16_000,
            PromptProfile::Compact => 8_000,
        }
    }

    pub fn mode_instruction(&self, mode: Mode) -> &'static str {
        match (self, mode) {
            (_, Mode::Quick) => QUICK_INSTRUCTION,
            (PromptProfile::Full, Mode::Default) => COMPREHENSIVE_INSTRUCTION,
            (PromptProfile::Balanced | PromptProfile::Compact, Mode::Default) => {
                BALANCED_INSTRUCTION
            }
        }
    }

    pub fn compose_user_message(&self, passage: &str, mode: Mode) -> String {
        format!(
            "Please provide sermon preparation analysis for: {passage}{}",
            self.mode_instruction(mode)
        )
    }
}

impl fmt::Display for PromptProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
