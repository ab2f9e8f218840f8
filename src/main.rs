use eframe::egui;
use egui::{Color32, RichText};

use rslider::{logging, HandleSize, Slider, SliderConfig, SliderState, SliderValue};

const BG_PANEL: Color32 = Color32::from_rgb(51, 51, 51);
const TEXT_LABEL: Color32 = Color32::from_rgb(180, 180, 180);
const TEXT_SECONDARY: Color32 = Color32::from_rgb(140, 140, 140);

fn main() -> eframe::Result<()> {
    logging::init_tracing(std::env::args().any(|arg| arg == "--debug"));

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 560.0])
            .with_min_inner_size([400.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "rSlider Gallery",
        native_options,
        Box::new(|_cc| Ok(Box::new(GalleryApp::new()))),
    )
}

struct GalleryRow {
    label: &'static str,
    state: SliderState,
    last_change: Option<SliderValue>,
}

impl GalleryRow {
    fn new(label: &'static str, config: SliderConfig) -> Self {
        // Gallery configs are static; a failure here is a programming error
        let state = SliderState::new(config)
            .unwrap_or_else(|e| panic!("invalid gallery config for '{label}': {e}"));
        Self {
            label,
            state,
            last_change: None,
        }
    }
}

struct GalleryApp {
    rows: Vec<GalleryRow>,
}

impl GalleryApp {
    fn new() -> Self {
        let rows = vec![
            GalleryRow::new(
                "Continuous single (0..100)",
                SliderConfig::single(0.0, 100.0).initial_value(35.0),
            ),
            GalleryRow::new(
                "Discrete single (0..10, step 2)",
                SliderConfig::single(0.0, 10.0).discrete(2.0).initial_value(4.0),
            ),
            GalleryRow::new(
                "Continuous range (0..100)",
                SliderConfig::range(0.0, 100.0).initial_range(20.0, 80.0),
            ),
            GalleryRow::new(
                "Discrete range (0..20, step 5)",
                SliderConfig::range(0.0, 20.0).discrete(5.0),
            ),
            GalleryRow::new(
                "Small handles (0..20)",
                SliderConfig::single(0.0, 20.0)
                    .initial_value(10.0)
                    .handle_size(HandleSize::Small),
            ),
        ];
        Self { rows }
    }
}

impl eframe::App for GalleryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(
                egui::Frame::default()
                    .fill(BG_PANEL)
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| {
                ui.label(
                    RichText::new("rSlider Gallery")
                        .size(16.0)
                        .color(TEXT_LABEL)
                        .strong(),
                );
                ui.add_space(12.0);

                for row in &mut self.rows {
                    ui.label(RichText::new(row.label).size(11.0).color(TEXT_LABEL));
                    ui.add_space(2.0);

                    let GalleryRow {
                        state, last_change, ..
                    } = row;
                    ui.add(
                        Slider::new(state)
                            .width(360.0)
                            .on_change(|value| *last_change = Some(value)),
                    );

                    let status = match row.last_change {
                        Some(value) => format!("last change: {value}"),
                        None => "no changes yet".to_owned(),
                    };
                    ui.label(RichText::new(status).size(10.0).color(TEXT_SECONDARY));
                    ui.add_space(14.0);
                }
            });
    }
}
