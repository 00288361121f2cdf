#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use practiceq::QuizApp;
    use practiceq::config::Settings;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load().unwrap_or_else(|err| {
        log::error!("{err}; se usan los ajustes por defecto");
        Settings::default()
    });
    log::info!("Servicio de preguntas: {}", settings.questions_url());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 720.0])
            .with_title("pracTiceQ"),
        ..Default::default()
    };
    eframe::run_native(
        "pracTiceQ",
        options,
        Box::new(|_cc| Ok(Box::new(QuizApp::new(settings)))),
    )
}

// En web el punto de entrada es `web::start`
#[cfg(target_arch = "wasm32")]
fn main() {}
