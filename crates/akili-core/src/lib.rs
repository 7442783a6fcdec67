pub mod assistant;
pub mod certificate;
pub mod chat;
pub mod generator;
pub mod llm_config;
pub mod openai;
pub mod progress;
pub mod quiz;
pub mod unlock;
