// Модули агента-симулятора
pub mod agent;
pub mod ai;
pub mod category;
pub mod cli;
pub mod config;
pub mod gui;
pub mod logger;
pub mod web;

pub use agent::{Agent, AgentResult};
pub use category::{categorize_prompt, Category};
pub use config::Config;
