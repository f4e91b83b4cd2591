/// Модуль для инициализации логирования
/// Формат: [HH:MM:SS LEVEL] модуль - сообщение

use std::io::Write;
use log::LevelFilter;

pub fn init() {
    let mut builder = env_logger::Builder::new();

    // Читаем RUST_LOG переменную если она установлена
    if let Ok(log_level) = std::env::var("RUST_LOG") {
        builder.parse_filters(&log_level);
    } else {
        // По умолчанию: INFO уровень
        builder.filter_level(LevelFilter::Info);
        // Отключаем логи от зависимостей (слишком многословно)
        builder.filter_module("eframe", LevelFilter::Warn);
        builder.filter_module("egui", LevelFilter::Warn);
        builder.filter_module("wgpu", LevelFilter::Warn);
        builder.filter_module("reqwest", LevelFilter::Warn);
        builder.filter_module("hyper", LevelFilter::Warn);
    }

    builder.format(|buf, record| {
        let now = chrono::Local::now().format("%H:%M:%S");
        writeln!(
            buf,
            "[{} {}] {} - {}",
            now,
            record.level(),
            record.target(),
            record.args()
        )
    });

    builder.init();
}
