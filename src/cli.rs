//! Консольная оболочка: одиночный запрос или интерактивная сессия.
//!
//! Оболочка только собирает строку, вызывает ядро и печатает
//! JSON-конверт; никакой своей логики у неё нет.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::agent::Agent;

/// Обрабатывает один промпт и печатает результат в виде JSON.
pub async fn run_once(agent: &Agent, prompt: &str, use_remote: bool) -> Result<()> {
    let result = agent.process(prompt, use_remote).await;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// Интерактивный режим: читает промпты построчно до команды выхода.
pub async fn run_interactive(agent: &Agent, use_remote: bool) -> Result<()> {
    print_banner();

    let use_remote = if use_remote {
        if agent.is_remote_configured() {
            println!("OpenAI API: ВКЛЮЧЕН");
            true
        } else {
            println!("OpenAI API: ВЫКЛЮЧЕН (OPENAI_API_KEY не задан)");
            false
        }
    } else {
        println!("OpenAI API: ВЫКЛЮЧЕН");
        false
    };
    println!();

    let stdin = io::stdin();
    let mut processed = 0usize;

    loop {
        print!("Введите промпт: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF
            println!();
            break;
        }

        let prompt = line.trim();
        if prompt.is_empty() {
            continue;
        }
        if matches!(prompt.to_lowercase().as_str(), "quit" | "exit" | "q") {
            break;
        }

        let result = agent.process(prompt, use_remote).await;
        println!("{}\n", serde_json::to_string_pretty(&result)?);
        processed += 1;
    }

    println!("До свидания!");
    if processed > 0 {
        println!("📈 За сессию обработано промптов: {}", processed);
    }

    Ok(())
}

fn print_banner() {
    println!("Агентик — симулятор AI-агента");
    println!("{}", "=".repeat(50));
    println!("Вводите промпты и получайте категоризированные ответы.");
    println!("Команды выхода: quit, exit, q.");
    println!("{}", "=".repeat(50));
}
