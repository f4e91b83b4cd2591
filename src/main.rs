use anyhow::Result;
use clap::{Parser, Subcommand};

use agentik::{cli, gui, logger, web, Agent, Config};

#[derive(Parser)]
#[command(
    name = "agentik",
    version,
    about = "Симулятор AI-агента: категоризация промптов и шаблонные или OpenAI-ответы"
)]
struct Args {
    /// Обработать один промпт и вывести JSON
    #[arg(long)]
    prompt: Option<String>,

    /// Делегировать ответы OpenAI API (нужен OPENAI_API_KEY)
    #[arg(long)]
    remote: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Запустить графический интерфейс
    Gui,
    /// Запустить HTTP API сервер
    Serve {
        /// Порт HTTP сервера
        #[arg(long, default_value_t = 5000)]
        port: u16,
    },
}

fn main() -> Result<()> {
    logger::init();
    log::info!("🚀 Агентик запущен");

    let args = Args::parse();

    let config = Config::default();
    log::info!("📁 Конфигурация загружена");

    // Создаем tokio runtime для async операций
    let rt = tokio::runtime::Runtime::new()?;

    match args.command {
        Some(Command::Gui) => {
            let _guard = rt.enter();
            gui::run(config).map_err(|e| anyhow::anyhow!("ошибка GUI: {}", e))
        }
        Some(Command::Serve { port }) => rt.block_on(web::serve(Agent::new(config), port)),
        None => {
            let agent = Agent::new(config);
            match args.prompt {
                Some(prompt) => rt.block_on(cli::run_once(&agent, &prompt, args.remote)),
                None => rt.block_on(cli::run_interactive(&agent, args.remote)),
            }
        }
    }
}
