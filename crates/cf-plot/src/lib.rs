//! Minimal egui application for plotting simulation traces.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

/// A window that renders named line series over a shared time axis.
pub struct TracePlot {
    title: String,
    x_label: String,
    series: Vec<Series>,
}

struct Series {
    name: String,
    points: Vec<[f64; 2]>,
}

impl TracePlot {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            x_label: String::new(),
            series: Vec::new(),
        }
    }

    pub fn x_label(mut self, label: &str) -> Self {
        self.x_label = label.to_string();
        self
    }

    /// Add a series from aligned time and value slices.
    pub fn with_series(mut self, name: &str, t: &[f64], v: &[f64]) -> Self {
        self.series.push(Series {
            name: name.to_string(),
            points: t.iter().zip(v).map(|(&t, &v)| [t, v]).collect(),
        });
        self
    }

    /// Open the window and block until it is closed.
    pub fn show(self) -> eframe::Result<()> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([900.0, 600.0])
                .with_title(self.title.clone()),
            ..Default::default()
        };

        let title = self.title.clone();
        eframe::run_native(&title, options, Box::new(move |_cc| Ok(Box::new(self))))
    }
}

impl eframe::App for TracePlot {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(&self.title);
            Plot::new("trace_plot")
                .legend(Legend::default())
                .x_axis_label(self.x_label.clone())
                .show(ui, |plot_ui| {
                    for series in &self.series {
                        let points: PlotPoints = series.points.clone().into();
                        plot_ui.line(Line::new(points).name(&series.name));
                    }
                });
        });
    }
}
