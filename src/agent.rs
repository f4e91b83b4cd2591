//! Ядро агента: категоризация промпта и генерация ответа.

use serde::Serialize;

use crate::ai::local;
use crate::ai::OpenAIClient;
use crate::category::{categorize_prompt, Category};
use crate::config::Config;

/// Результат обработки одного промпта.
///
/// Набор полей является стабильным JSON-контрактом, который все
/// оболочки (CLI, GUI, HTTP) отдают без изменений.
#[derive(Debug, Clone, Serialize)]
pub struct AgentResult {
    pub prompt: String,
    pub category: Category,
    pub response: String,
    pub used_remote: bool,
}

/// Агент-симулятор: конфигурация плюс, при наличии ключа, клиент
/// удалённого API. Состояния между запросами агент не хранит.
pub struct Agent {
    config: Config,
    openai: Option<OpenAIClient>,
}

impl Agent {
    pub fn new(config: Config) -> Self {
        let openai = OpenAIClient::from_config(&config);

        if openai.is_some() {
            log::info!("🔑 OpenAI API подключен (модель {})", config.openai_model);
        } else {
            log::info!("📴 OPENAI_API_KEY не задан — работаем на шаблонах");
        }

        Self { config, openai }
    }

    /// Полный конвейер: категория, затем ответ.
    pub async fn process(&self, prompt: &str, use_remote: bool) -> AgentResult {
        let category = categorize_prompt(prompt);
        let (response, used_remote) = self.generate_response(prompt, category, use_remote).await;

        log::debug!("категория: {}, удалённый ответ: {}", category, used_remote);

        AgentResult {
            prompt: prompt.to_string(),
            category,
            response,
            used_remote,
        }
    }

    /// Генерирует ответ: удалённая модель, если она запрошена и настроена,
    /// иначе шаблон. Сбой удалённого вызова не ошибка, а тихий откат на
    /// шаблон; наружу он не поднимается.
    pub async fn generate_response(
        &self,
        prompt: &str,
        category: Category,
        use_remote: bool,
    ) -> (String, bool) {
        if use_remote {
            match &self.openai {
                Some(client) => {
                    match client.complete(prompt, category.system_instruction()).await {
                        Ok(text) => return (text, true),
                        Err(e) => {
                            log::warn!("⚠️ OpenAI недоступен, откатываюсь на шаблон: {}", e);
                        }
                    }
                }
                None => {
                    log::debug!("удалённый ответ запрошен, но ключ не настроен");
                }
            }
        }

        (local::template_response(prompt, category), false)
    }

    /// Настроен ли удалённый API.
    pub fn is_remote_configured(&self) -> bool {
        self.config.openai_api_key.is_some() && self.openai.is_some()
    }
}
