use cybersafe_lab::TrainingApp;

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();
    log::info!("Arrancando Laboratorio CyberSafe...");

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Laboratorio CyberSafe",
        options,
        Box::new(|_cc| Ok(Box::new(TrainingApp::new()))),
    )
}
