//! Шаблонные ответы без обращения к LLM.
//!
//! На каждую категорию приходится один статический шаблон, в который
//! подставляется фрагмент исходного промпта. Никакого анализа текста
//! здесь нет, и каждый шаблон честно об этом предупреждает.

use crate::category::Category;

/// Строит шаблонный ответ для категории.
///
/// Чистое форматирование строк: одинаковый вход всегда даёт байт в байт
/// одинаковый ответ.
pub fn template_response(prompt: &str, category: Category) -> String {
    match category {
        Category::Summarization => format!(
            "Краткое изложение вашего запроса:\n\n\
             Ваш промпт касается: {}...\n\n\
             Ключевые пункты:\n\
             • Основная тема определена\n\
             • Контекст проанализирован\n\
             • Подход к изложению выбран\n\n\
             (Примечание: это симулированный ответ. Для настоящей суммаризации \
             установите переменную окружения OPENAI_API_KEY.)",
            excerpt(prompt, 100)
        ),
        Category::CodeHelp => format!(
            "По вашему вопросу о коде:\n\n\
             Обнаруженная проблема: {}\n\n\
             Рекомендуемый порядок действий:\n\
             1. Перечитайте сообщение об ошибке и требования\n\
             2. Проверьте синтаксис и логику\n\
             3. Прогоните код на простых входных данных\n\
             4. Отлаживайте шаг за шагом\n\n\
             (Примечание: это симулированный ответ. Для подробного разбора кода \
             установите переменную окружения OPENAI_API_KEY.)",
            first_sentence(prompt)
        ),
        Category::GrammarCheck => format!(
            "Разбор вашего текста:\n\n\
             Исходный текст: {}\n\n\
             На что обратить внимание:\n\
             • Согласование подлежащего и сказуемого\n\
             • Пунктуация\n\
             • Написание ключевых терминов\n\n\
             (Примечание: это симулированный ответ. Для настоящей проверки \
             грамматики установите переменную окружения OPENAI_API_KEY.)",
            excerpt(prompt, 200)
        ),
        Category::General => format!(
            "Я понял ваш вопрос так: {}...\n\n\
             Это общий запрос, постараюсь помочь! Для более точных и развёрнутых \
             ответов установите переменную окружения OPENAI_API_KEY.\n\n\
             Хотите уточнить что-нибудь ещё?",
            excerpt(prompt, 100)
        ),
    }
}

// Срез по символам, не по байтам: промпты обычно на кириллице,
// и срез по байтам падал бы на границе символа.
fn excerpt(prompt: &str, max_chars: usize) -> String {
    prompt.chars().take(max_chars).collect()
}

/// Первое «предложение» промпта как краткая формулировка проблемы.
fn first_sentence(prompt: &str) -> String {
    let sentence = prompt.split('.').next().unwrap_or(prompt).trim();
    excerpt(sentence, 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_template_interpolates_prompt() {
        let prompt = "проверь вот этот фрагмент текста";
        for cat in Category::ALL {
            let response = template_response(prompt, *cat);
            assert!(
                response.contains(prompt),
                "шаблон {} не содержит промпт",
                cat
            );
        }
    }

    #[test]
    fn every_template_mentions_remote_env_var() {
        for cat in Category::ALL {
            assert!(template_response("тест", *cat).contains("OPENAI_API_KEY"));
        }
    }

    #[test]
    fn empty_prompt_yields_well_formed_template() {
        for cat in Category::ALL {
            assert!(!template_response("", *cat).is_empty());
        }
    }

    #[test]
    fn output_is_byte_identical_for_same_input() {
        let a = template_response("same prompt", Category::General);
        let b = template_response("same prompt", Category::General);
        assert_eq!(a, b);
    }

    #[test]
    fn long_cyrillic_prompt_is_cut_on_char_boundary() {
        let prompt = "ю".repeat(300);
        let response = template_response(&prompt, Category::Summarization);
        assert!(response.contains(&"ю".repeat(100)));
        assert!(!response.contains(&"ю".repeat(101)));
    }

    #[test]
    fn code_help_uses_first_sentence() {
        let prompt = "Не компилируется функция. Вот стектрейс и куча деталей.";
        let response = template_response(prompt, Category::CodeHelp);
        assert!(response.contains("Не компилируется функция"));
        assert!(!response.contains("стектрейс"));
    }

    #[test]
    fn first_sentence_is_capped_at_100_chars() {
        let prompt = "а".repeat(250);
        assert_eq!(first_sentence(&prompt).chars().count(), 100);
    }

    #[test]
    fn excerpt_keeps_short_prompt_whole() {
        assert_eq!(excerpt("короткий", 100), "короткий");
    }
}
