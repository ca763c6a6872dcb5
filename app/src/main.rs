use std::path::PathBuf;
use std::time::Instant;

use eframe::{App, Frame, NativeOptions, egui, run_native};
use egui::{ColorImage, TextureHandle, Vec2};
use image::RgbImage;
use mountains::{SceneConfig, raster, svg};

const DEFAULT_EXPORT_WIDTH: u32 = 2048;

struct MountainApp {
    config: SceneConfig,

    // size of exported PNG/SVG files; height is always half the width
    export_width: u32,

    // preview texture and the canvas size it was rendered at
    scene_texture: Option<TextureHandle>,
    canvas: [u32; 2],
    // set whenever the config changes so the preview is redrawn
    dirty: bool,

    status_message: String,
}

impl Default for MountainApp {
    fn default() -> Self {
        Self {
            config: SceneConfig::default(),
            export_width: DEFAULT_EXPORT_WIDTH,
            scene_texture: None,
            canvas: [0, 0],
            dirty: true,
            status_message: String::new(),
        }
    }
}

impl MountainApp {
    fn render_preview(&mut self, ctx: &egui::Context, width: u32, height: u32) {
        let start = Instant::now();
        self.canvas = [width, height];
        self.dirty = false;

        match raster::render_config(&self.config, width, height) {
            Ok(img) => {
                self.scene_texture = Some(load_scene_texture(ctx, &img));
                let ms = start.elapsed().as_secs_f32() * 1000.0;
                self.status_message = format!(
                    "Rendered {}×{} in {:.2} ms (seed {})",
                    width, height, ms, self.config.seed
                );
            }
            Err(e) => {
                log::error!("render failed: {}", e);
                self.scene_texture = None;
                self.status_message = format!("Render error: {}", e);
            }
        }
    }

    fn export_size(&self) -> (u32, u32) {
        (self.export_width, (self.export_width / 2).max(1))
    }

    fn save_png(&mut self, path: PathBuf) {
        let (w, h) = self.export_size();
        self.status_message = match raster::save_png(&self.config, w, h, &path) {
            Ok(()) => format!("Saved {}", path.display()),
            Err(e) => format!("PNG error: {}", e),
        };
    }

    fn save_svg(&mut self, path: PathBuf) {
        let (w, h) = self.export_size();
        self.status_message = match svg::save_svg(&self.config, w, h, &path) {
            Ok(()) => format!("Saved {}", path.display()),
            Err(e) => format!("SVG error: {}", e),
        };
    }

    fn layer_controls(&mut self, ui: &mut egui::Ui) {
        let mut changed = false;
        for (index, layer) in self.config.mountains.iter_mut().enumerate() {
            egui::CollapsingHeader::new(format!("Layer {}", index))
                .default_open(false)
                .show(ui, |ui| {
                    let shape = &mut layer.shape;
                    changed |= ui
                        .add(egui::Slider::new(&mut shape.octaves, 1..=10).text("Octaves"))
                        .changed();
                    changed |= ui
                        .add(egui::Slider::new(&mut shape.flatness, 0.5..=8.0).text("Flatness"))
                        .changed();
                    changed |= ui
                        .add(egui::Slider::new(&mut shape.height_bias, -1.0..=1.0).text("Height"))
                        .changed();
                    changed |= ui
                        .add(egui::Slider::new(&mut shape.peaks, 1..=12).text("Peaks"))
                        .changed();
                    ui.label(format!("Colors: {}", layer.colors.join(" → ")));
                });
        }
        if changed {
            self.dirty = true;
        }
    }
}

fn load_scene_texture(ctx: &egui::Context, img: &RgbImage) -> TextureHandle {
    let (w, h) = img.dimensions();
    let color_image = ColorImage::from_rgb([w as usize, h as usize], img.as_raw());
    ctx.load_texture("mountains", color_image, egui::TextureOptions::LINEAR)
}

impl App for MountainApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::SidePanel::left("controls").show(ctx, |ui| {
            ui.heading("Mountain Scene");
            ui.separator();

            // Seed
            ui.label("Seed");
            if ui
                .add(egui::DragValue::new(&mut self.config.seed).speed(1.0))
                .changed()
            {
                self.dirty = true;
            }
            if ui.button("Regenerate").clicked() {
                self.config.regenerate();
                self.dirty = true;
            }

            ui.separator();
            egui::ScrollArea::vertical()
                .max_height(320.0)
                .show(ui, |ui| self.layer_controls(ui));

            ui.separator();
            ui.horizontal(|ui| {
                ui.label("Export width:");
                ui.add(egui::Slider::new(&mut self.export_width, 256..=4096));
            });

            // Save to PNG
            if ui.button("Save PNG…").clicked() {
                let name = format!("mountains_{}.png", self.config.seed);
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("PNG", &["png"])
                    .set_file_name(name)
                    .save_file()
                {
                    self.save_png(path);
                }
            }

            // Save to SVG
            if ui.button("Save SVG…").clicked() {
                let name = format!("mountains_{}.svg", self.config.seed);
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("SVG", &["svg"])
                    .set_file_name(name)
                    .save_file()
                {
                    self.save_svg(path);
                }
            }

            ui.separator();

            if ui.button("Load config…").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("JSON", &["json"])
                    .pick_file()
                {
                    match SceneConfig::load(&path) {
                        Ok(config) => {
                            self.config = config;
                            self.dirty = true;
                            self.status_message = format!("Loaded {}", path.display());
                        }
                        Err(e) => self.status_message = format!("Config error: {}", e),
                    }
                }
            }

            if ui.button("Save config…").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("JSON", &["json"])
                    .set_file_name("scene.json")
                    .save_file()
                {
                    self.status_message = match self.config.save(&path) {
                        Ok(()) => format!("Saved {}", path.display()),
                        Err(e) => format!("Config error: {}", e),
                    };
                }
            }

            ui.separator();
            ui.label(&self.status_message);
        });

        // central display: the canvas is as wide as the panel and half as tall
        egui::CentralPanel::default().show(ctx, |ui| {
            let display_width = ui.available_width().max(1.0);
            let display = Vec2::new(display_width, display_width / 2.0);

            // Render at physical pixels so the preview stays sharp on high-DPI screens
            let ppp = ctx.pixels_per_point();
            let width = ((display.x * ppp) as u32).max(1);
            let height = (width / 2).max(1);

            if self.dirty || self.canvas != [width, height] {
                self.render_preview(ctx, width, height);
            }

            match &self.scene_texture {
                Some(tex) => {
                    ui.image((tex.id(), display));
                }
                None => {
                    ui.centered_and_justified(|ui| {
                        ui.label("Nothing to show. Check the layer settings.");
                    });
                }
            }
        });
    }
}

fn main() -> eframe::Result {
    env_logger::init();

    let opts = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 600.0])
            .with_min_inner_size([500.0, 300.0]),
        ..Default::default()
    };
    run_native(
        "Mountains",
        opts,
        Box::new(|_cc| Ok(Box::new(MountainApp::default()))),
    )
}
