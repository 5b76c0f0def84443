/// System message sent ahead of every generation prompt.
pub const SYSTEM_PROMPT: &str =
    "You are a professional blog writer skilled in creating engaging, well-researched content.";

/// Fixed model parameters for post generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl GenerationSettings {
    /// Default settings with a different model.
    pub fn with_model(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".to_string(),
            temperature: 0.7,
            max_tokens: 2000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = GenerationSettings::default();
        assert_eq!(settings.model, "gpt-3.5-turbo");
        assert_eq!(settings.temperature, 0.7);
        assert_eq!(settings.max_tokens, 2000);
    }

    #[test]
    fn test_with_model_keeps_sampling_parameters() {
        let settings = GenerationSettings::with_model("gpt-4o-mini");
        assert_eq!(settings.model, "gpt-4o-mini");
        assert_eq!(settings.max_tokens, 2000);
    }
}
