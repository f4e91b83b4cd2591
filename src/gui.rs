//! Графическая оболочка на egui.
//!
//! Окно с историей обменов и строкой ввода. Промпт обрабатывается в
//! фоне на tokio runtime, готовый результат возвращается в UI-поток
//! через канал.

use std::sync::mpsc as std_mpsc;
use std::sync::Arc;
use std::time::Duration;

use eframe::egui;

use crate::agent::{Agent, AgentResult};
use crate::config::Config;

/// Запускает окно приложения. Вызывающий код обязан заранее войти в
/// tokio runtime: фоновые задачи стартуют через `tokio::spawn`.
pub fn run(config: Config) -> Result<(), eframe::Error> {
    let agent_name = config.agent_name.clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height]),
        ..Default::default()
    };

    eframe::run_native(
        &agent_name,
        options,
        Box::new(move |_cc| -> Result<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>> {
            Ok(Box::new(AgentApp::new(config)))
        }),
    )
}

pub struct AgentApp {
    config: Config,
    agent: Arc<Agent>,
    exchanges: Vec<AgentResult>,
    input_text: String,
    use_remote: bool,
    is_thinking: bool,
    response_receiver: std_mpsc::Receiver<AgentResult>,
    response_sender: std_mpsc::Sender<AgentResult>,
    style_initialized: bool,
}

impl AgentApp {
    pub fn new(config: Config) -> Self {
        let agent = Arc::new(Agent::new(config.clone()));
        let (sender, receiver) = std_mpsc::channel();

        Self {
            config,
            agent,
            exchanges: Vec::new(),
            input_text: String::new(),
            use_remote: false,
            is_thinking: false,
            response_receiver: receiver,
            response_sender: sender,
            style_initialized: false,
        }
    }

    // Стиль настраиваем один раз при первом кадре
    fn init_style(&mut self, ctx: &egui::Context) {
        if self.style_initialized {
            return;
        }
        ctx.set_pixels_per_point(1.1);
        self.style_initialized = true;
    }

    fn send_prompt(&mut self, ctx: &egui::Context) {
        let prompt = self.input_text.trim().to_string();
        if prompt.is_empty() || self.is_thinking {
            return;
        }

        self.input_text.clear();
        self.is_thinking = true;

        let agent = Arc::clone(&self.agent);
        let sender = self.response_sender.clone();
        let use_remote = self.use_remote;
        let repaint_ctx = ctx.clone();

        // Обрабатываем промпт в фоне, результат придёт через канал
        tokio::spawn(async move {
            let result = agent.process(&prompt, use_remote).await;
            let _ = sender.send(result);
            repaint_ctx.request_repaint();
        });
    }

    /// Забирает готовые результаты из канала (вызывается из UI-потока).
    fn drain_responses(&mut self) {
        while let Ok(result) = self.response_receiver.try_recv() {
            self.exchanges.push(result);
            self.is_thinking = false;
        }
    }
}

impl eframe::App for AgentApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.init_style(ctx);
        self.drain_responses();

        egui::TopBottomPanel::bottom("input_panel").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                let input = ui.add_sized(
                    [ui.available_width() - 190.0, 24.0],
                    egui::TextEdit::singleline(&mut self.input_text)
                        .hint_text("Введите промпт..."),
                );

                let enter_pressed =
                    input.lost_focus() && ctx.input(|i| i.key_pressed(egui::Key::Enter));
                let send_clicked = ui
                    .add_enabled(!self.is_thinking, egui::Button::new("Отправить"))
                    .clicked();

                ui.checkbox(&mut self.use_remote, "OpenAI");

                if enter_pressed || send_clicked {
                    self.send_prompt(ctx);
                }
            });
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(format!("{} — симулятор AI-агента", self.config.agent_name));
            ui.separator();

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for exchange in &self.exchanges {
                        ui.label(
                            egui::RichText::new(format!("Вы: {}", exchange.prompt)).strong(),
                        );
                        ui.label(
                            egui::RichText::new(format!(
                                "категория: {} · режим: {}",
                                exchange.category.label(),
                                if exchange.used_remote { "OpenAI" } else { "шаблон" }
                            ))
                            .small()
                            .color(egui::Color32::GRAY),
                        );
                        ui.label(&exchange.response);
                        ui.add_space(10.0);
                    }

                    if self.is_thinking {
                        ui.label("⏳ Думаю...");
                    }
                });
        });

        // Пока ждём ответ, перерисовываемся сами, без действий пользователя
        if self.is_thinking {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
