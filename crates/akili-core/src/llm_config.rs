use async_openai::config::OpenAIConfig;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

#[derive(Debug, Clone, Default)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub api_base: Option<String>,
    pub model: Option<String>,
}

impl LlmConfig {
    #[must_use]
    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    #[must_use]
    pub fn openai_config(&self) -> OpenAIConfig {
        let mut config = OpenAIConfig::new();
        if let Some(key) = &self.api_key {
            config = config.with_api_key(key);
        }
        if let Some(base) = &self.api_base {
            config = config.with_api_base(base);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_falls_back_to_default() {
        assert_eq!(LlmConfig::default().model(), DEFAULT_MODEL);
        let config = LlmConfig {
            model: Some("gpt-4o".to_owned()),
            ..Default::default()
        };
        assert_eq!(config.model(), "gpt-4o");
    }
}
