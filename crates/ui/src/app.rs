use eframe::egui;
use scrollfx_core::demo::{landing_scene, DemoPage};
use scrollfx_core::scene_loader;
use scrollfx_core::{Pipeline, TickDiscipline, Ticker};
use scrollfx_protocol::Viewport;

use crate::renderer::{self, PageStyles};
use crate::theme::ThemeState;

/// Logical page viewport the pipeline runs against; the panel scales it.
const PAGE_VIEWPORT: Viewport = Viewport {
    width: 1280.0,
    height: 1000.0,
};

const SCROLL_SPEED: f32 = 2.5;

/// Main application state.
pub struct ScrollApp {
    page: DemoPage,
    pipeline: Pipeline,
    /// Polling-discipline ticker: the page is re-projected every frame, so
    /// effects driven by layout motion stay correct without scroll events.
    ticker: Ticker,
    scroll_y: f32,
    styles: PageStyles,
    theme: ThemeState,
    /// Error message to display.
    error: Option<String>,
    /// Pending scene data from async load.
    pending_data: std::sync::Arc<std::sync::Mutex<Option<Vec<u8>>>>,
}

impl ScrollApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let pending_data: std::sync::Arc<std::sync::Mutex<Option<Vec<u8>>>> =
            std::sync::Arc::new(std::sync::Mutex::new(None));

        // On WASM, check URL hash for a hosted scene (e.g. #demo)
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(w) = web_sys::window() {
                let hash = w.location().hash().unwrap_or_default();
                if hash == "#demo" {
                    let pd = pending_data.clone();
                    let ctx = cc.egui_ctx.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        match Self::fetch_bytes("/assets/landing.json").await {
                            Ok(resp) => {
                                if let Ok(mut lock) = pd.lock() {
                                    *lock = Some(resp);
                                }
                                ctx.request_repaint();
                            }
                            Err(e) => {
                                web_sys::console::error_1(
                                    &format!("scrollfx: fetch error: {e}").into(),
                                );
                            }
                        }
                    });
                }
            }
        }

        Self {
            page: DemoPage::new(),
            pipeline: Pipeline::new(landing_scene()),
            ticker: Ticker::new(TickDiscipline::Continuous),
            scroll_y: 0.0,
            styles: PageStyles::default(),
            theme: ThemeState::new(),
            error: None,
            pending_data,
        }
    }

    fn load_scene(&mut self, data: &[u8]) {
        match scene_loader::load_scene(data) {
            Ok(scene) => {
                self.pipeline = Pipeline::new(scene);
                self.styles = PageStyles::default();
                self.theme.sweep_active = false;
                self.scroll_y = 0.0;
                self.error = None;
            }
            Err(e) => {
                self.error = Some(format!("Failed to load scene: {e}"));
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    async fn fetch_bytes(url: &str) -> Result<Vec<u8>, String> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen_futures::JsFuture;

        let window = web_sys::window().ok_or("no window")?;
        let resp_value = JsFuture::from(window.fetch_with_str(url))
            .await
            .map_err(|e| format!("{e:?}"))?;
        let resp: web_sys::Response = resp_value.dyn_into().map_err(|_| "not a Response")?;
        if !resp.ok() {
            return Err(format!("HTTP {}", resp.status()));
        }
        let buf = JsFuture::from(resp.array_buffer().map_err(|e| format!("{e:?}"))?)
            .await
            .map_err(|e| format!("{e:?}"))?;
        let uint8 = js_sys::Uint8Array::new(&buf);
        Ok(uint8.to_vec())
    }
}

impl eframe::App for ScrollApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for async-loaded scene data
        let pending = {
            let mut lock = self.pending_data.lock().unwrap_or_else(|e| e.into_inner());
            lock.take()
        };
        if let Some(data) = pending {
            self.load_scene(&data);
        }

        let max_scroll = self.page.max_scroll(&PAGE_VIEWPORT) as f32;

        // Top toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("🌀 scrollfx");
                ui.separator();

                if ui.button("📂 Open scene").clicked() {
                    #[cfg(not(target_arch = "wasm32"))]
                    {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Scene", &["json"])
                            .pick_file()
                        {
                            match std::fs::read(&path) {
                                Ok(data) => self.load_scene(&data),
                                Err(e) => {
                                    self.error = Some(format!("Failed to read file: {e}"));
                                }
                            }
                        }
                    }
                }

                ui.separator();

                if ui.button(format!("🎨 {}", self.theme.name())).clicked() {
                    self.theme.cycle();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let pct = if max_scroll > 0.0 {
                        self.scroll_y / max_scroll * 100.0
                    } else {
                        0.0
                    };
                    ui.label(format!("{pct:.0}%"));
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(err) = &self.error {
                    ui.colored_label(egui::Color32::RED, err);
                } else {
                    let sweep = if self.theme.sweep_active { "on" } else { "off" };
                    ui.label(format!(
                        "Scroll: {:.0}px / {max_scroll:.0}px | Commands: {} | Sweep theme: {sweep} | Spotlight: {}",
                        self.scroll_y,
                        self.styles.commands.len(),
                        self.styles
                            .active_index
                            .map_or_else(|| "-".to_string(), |i| i.to_string()),
                    ));
                }
            });
        });

        // Central panel: the scrolling page
        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_rect_before_wrap();
            let response = ui.allocate_rect(available, egui::Sense::click_and_drag());

            if response.dragged() {
                self.scroll_y = (self.scroll_y - response.drag_delta().y * SCROLL_SPEED)
                    .clamp(0.0, max_scroll);
            }
            let scroll = ui.input(|i| i.smooth_scroll_delta);
            if scroll.y.abs() > 0.1 {
                self.scroll_y = (self.scroll_y - scroll.y * SCROLL_SPEED).clamp(0.0, max_scroll);
            }

            if self.ticker.should_tick() {
                let geometry = self
                    .page
                    .geometry_at(f64::from(self.scroll_y), PAGE_VIEWPORT);
                let commands = self.pipeline.tick(&geometry);
                self.styles.apply(commands, &mut self.theme);

                let painter = ui.painter_at(available);
                renderer::draw_page(&painter, available, &geometry, &self.styles, &self.theme);
            }
        });

        // Continuous discipline: keep the frame pump running.
        if !self.ticker.is_cancelled() {
            ctx.request_repaint();
        }
    }
}
