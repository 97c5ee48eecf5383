mod client;
mod prompt;
mod types;

pub use client::OpenAiClient;
pub use prompt::build_messages;
pub use types::Message;
