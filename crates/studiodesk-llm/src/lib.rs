pub mod types;
pub mod traits;
pub mod config;
pub mod openai;

pub use traits::{
    ChatClient,
    ChatRequest, ChatResponse, ChatOptions,
    ResponseFormat,
    TokenUsage,
};

pub use config::{ClientFactory, OpenAIConfig, ProviderConfig, ProviderType};
pub use openai::OpenAIClient;
pub use types::{Message, Content};
