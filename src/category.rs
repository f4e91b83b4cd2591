//! Категоризация промпта по ключевым словам.
//!
//! Чистая эвристика без обращений к LLM: промпт приводится к нижнему
//! регистру и проверяется по упорядоченной таблице правил, первое
//! сработавшее правило определяет категорию.

use serde::{Deserialize, Serialize};

/// Категория пользовательского промпта.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Просьба кратко изложить текст
    Summarization,
    /// Вопрос про код, ошибки, отладку
    CodeHelp,
    /// Проверка грамматики и орфографии
    GrammarCheck,
    /// Всё остальное
    General,
}

// Порядок проверки правил фиксирован: от узких категорий к широким.
// Промпт «summarize this function that throws an error» должен попасть
// в Summarization, а не в CodeHelp из-за слова «error». Изменение
// порядка или состава таблицы меняет классификацию неоднозначных
// промптов и ломает существующие фикстуры.

const SUMMARIZATION_KEYWORDS: &[&str] = &[
    "summarize",
    "summary",
    "tl;dr",
    "tldr",
    "brief",
    "overview",
    "condense",
    "in short",
    "recap",
    "key points",
];

const GRAMMAR_KEYWORDS: &[&str] = &[
    "grammar",
    "spell",
    "spelling",
    "proofread",
    "correct this",
    "punctuation",
    "fix grammar",
    "grammatical",
    "check grammar",
    "check spelling",
];

const CODE_KEYWORDS: &[&str] = &[
    "error",
    "bug",
    "code",
    "function",
    "debug",
    "how to",
    "implement",
    "syntax",
    "programming",
    "python",
    "javascript",
    "java",
    "c++",
    "algorithm",
    "script",
    "compile",
    "exception",
];

impl Category {
    /// Все категории в порядке приоритета проверки.
    pub const ALL: &'static [Category] = &[
        Category::Summarization,
        Category::GrammarCheck,
        Category::CodeHelp,
        Category::General,
    ];

    /// Строковый идентификатор для JSON и логов.
    pub fn id(self) -> &'static str {
        match self {
            Category::Summarization => "summarization",
            Category::CodeHelp => "code-help",
            Category::GrammarCheck => "grammar-check",
            Category::General => "general",
        }
    }

    /// Разбор идентификатора обратно в категорию.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "summarization" => Some(Category::Summarization),
            "code-help" => Some(Category::CodeHelp),
            "grammar-check" => Some(Category::GrammarCheck),
            "general" => Some(Category::General),
            _ => None,
        }
    }

    /// Человекочитаемая подпись для интерфейса.
    pub fn label(self) -> &'static str {
        match self {
            Category::Summarization => "суммаризация",
            Category::CodeHelp => "помощь с кодом",
            Category::GrammarCheck => "проверка грамматики",
            Category::General => "общий вопрос",
        }
    }

    /// Системная инструкция для удалённой модели.
    pub fn system_instruction(self) -> &'static str {
        match self {
            Category::Summarization => {
                "Ты помощник, который составляет краткие и точные изложения текста."
            }
            Category::CodeHelp => {
                "Ты помощник программиста: помогаешь разбирать ошибки в коде \
                 и отвечаешь на технические вопросы."
            }
            Category::GrammarCheck => {
                "Ты корректор: проверяешь грамматику, орфографию и пунктуацию \
                 и исправляешь текст."
            }
            Category::General => "Ты дружелюбный помощник.",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Определяет категорию промпта по таблице ключевых слов.
///
/// Функция тотальна: любой вход, включая пустую строку, даёт ровно одну
/// категорию. Совпадение ключевых слов не зависит от регистра; признак
/// блока кода ищется в исходной строке.
pub fn categorize_prompt(prompt: &str) -> Category {
    let lower = prompt.to_lowercase();

    if SUMMARIZATION_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        return Category::Summarization;
    }

    if GRAMMAR_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        return Category::GrammarCheck;
    }

    if has_code_block(prompt) || CODE_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        return Category::CodeHelp;
    }

    Category::General
}

/// Похож ли промпт на вставленный код: markdown-ограждение
/// или строка, начинающаяся с отступа.
fn has_code_block(prompt: &str) -> bool {
    prompt.contains("```") || prompt.contains("\n    ") || prompt.contains("\n\t")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_prompt_is_general() {
        assert_eq!(categorize_prompt(""), Category::General);
    }

    #[test]
    fn whitespace_only_is_general() {
        assert_eq!(categorize_prompt("   \n  "), Category::General);
    }

    #[test]
    fn summarize_keyword() {
        assert_eq!(
            categorize_prompt("Please summarize this article"),
            Category::Summarization
        );
        assert_eq!(categorize_prompt("tl;dr of the meeting notes"), Category::Summarization);
        assert_eq!(
            categorize_prompt("give me the key points of this report"),
            Category::Summarization
        );
    }

    #[test]
    fn grammar_keyword() {
        assert_eq!(
            categorize_prompt("check grammar in this sentence"),
            Category::GrammarCheck
        );
        assert_eq!(categorize_prompt("proofread my essay"), Category::GrammarCheck);
    }

    #[test]
    fn code_keyword() {
        assert_eq!(
            categorize_prompt("I have a bug in my python script"),
            Category::CodeHelp
        );
        assert_eq!(categorize_prompt("how to sort a list"), Category::CodeHelp);
    }

    #[test]
    fn fenced_code_block_without_keywords() {
        assert_eq!(
            categorize_prompt("```\nlet x = 1;\n```"),
            Category::CodeHelp
        );
    }

    #[test]
    fn indented_block_without_keywords() {
        assert_eq!(categorize_prompt("look at this\n    x = 1"), Category::CodeHelp);
        assert_eq!(categorize_prompt("look at this\n\tx = 1"), Category::CodeHelp);
    }

    #[test]
    fn default_fallback_is_general() {
        assert_eq!(
            categorize_prompt("What is the weather like today"),
            Category::General
        );
    }

    #[test]
    fn summarization_wins_over_code() {
        // «error» не должен перетягивать промпт про суммаризацию
        assert_eq!(
            categorize_prompt("Please summarize this function that throws an error"),
            Category::Summarization
        );
    }

    #[test]
    fn grammar_wins_over_code() {
        assert_eq!(
            categorize_prompt("fix grammar in my error report"),
            Category::GrammarCheck
        );
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(
            categorize_prompt("SUMMARIZE this"),
            categorize_prompt("summarize this")
        );
        assert_eq!(categorize_prompt("DEBUG THIS"), Category::CodeHelp);
    }

    #[test]
    fn deterministic_on_repeated_calls() {
        let prompt = "explain the overview of my c++ code";
        assert_eq!(categorize_prompt(prompt), categorize_prompt(prompt));
    }

    #[test]
    fn very_long_prompt_does_not_panic() {
        let long = "слово ".repeat(100_000);
        assert_eq!(categorize_prompt(&long), Category::General);
    }

    #[test]
    fn non_alphabetic_prompt_is_general() {
        assert_eq!(categorize_prompt("12345 !!! ???"), Category::General);
    }

    #[test]
    fn cyrillic_prompt_does_not_panic() {
        assert_eq!(categorize_prompt("Привет, как дела?"), Category::General);
    }

    #[test]
    fn id_roundtrip() {
        for cat in Category::ALL {
            assert_eq!(Category::from_id(cat.id()), Some(*cat));
        }
        assert_eq!(Category::from_id("unknown"), None);
        assert_eq!(Category::from_id(""), None);
    }

    #[test]
    fn display_matches_id() {
        for cat in Category::ALL {
            assert_eq!(format!("{cat}"), cat.id());
        }
    }

    #[test]
    fn serde_uses_kebab_case_ids() {
        let json = serde_json::to_string(&Category::CodeHelp).unwrap();
        assert_eq!(json, "\"code-help\"");
        let back: Category = serde_json::from_str("\"grammar-check\"").unwrap();
        assert_eq!(back, Category::GrammarCheck);
    }

    #[test]
    fn system_instructions_are_non_empty() {
        for cat in Category::ALL {
            assert!(!cat.system_instruction().is_empty());
            assert!(!cat.label().is_empty());
        }
    }
}
