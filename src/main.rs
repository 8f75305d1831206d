use nbs2doakmp::ui::ConverterApp;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([400.0, 600.0])
            .with_title("nbs2doakmp"),
        ..Default::default()
    };

    let _ = eframe::run_native(
        "nbs2doakmp",
        options,
        Box::new(|_cc| Ok(Box::new(ConverterApp::new()))),
    );
}
