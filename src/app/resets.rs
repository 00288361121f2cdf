use super::*;

impl QuizApp {
    /// Vuelve a la configuración. Conserva lo elegido por el usuario y
    /// descarta cualquier petición en vuelo.
    pub fn reset(&mut self) {
        if self.pending_fetch.take().is_some() {
            log::info!("Petición en curso descartada por reinicio");
        }
        self.questions.clear();
        self.answers.clear();
        self.submitted = false;
        self.score = 0;
        self.message.clear();
        self.state = AppState::Configuring;
    }
}
