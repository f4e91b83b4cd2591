pub mod local;
pub mod openai;

pub use openai::{OpenAIClient, RemoteError};
