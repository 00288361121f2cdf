use crate::QuizApp;
use crate::config::Settings;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::HtmlCanvasElement;

const CANVAS_ID: &str = "practiceq_canvas";

#[wasm_bindgen(start)]
pub fn start() {
    eframe::WebLogger::init(log::LevelFilter::Info).ok();

    wasm_bindgen_futures::spawn_local(async {
        let canvas = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CANVAS_ID))
            .and_then(|e| e.dyn_into::<HtmlCanvasElement>().ok());

        let Some(canvas) = canvas else {
            log::error!("No existe el canvas #{CANVAS_ID}");
            return;
        };

        let settings = Settings::load().unwrap_or_default();
        let result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::new(QuizApp::new(settings)))),
            )
            .await;

        if let Err(err) = result {
            log::error!("No se pudo arrancar la app web: {err:?}");
        }
    });
}
