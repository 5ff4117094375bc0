//! Desktop preview app for eyeblink-composer
//!
//! Simulates a strip full of blinking eyes in a window with interactive controls.
//! Drives the same `FrameScheduler` used on hardware with synthetic time.

use std::time::Instant as StdInstant;

use eframe::egui::{self};
use eyeblink_composer::{
    FrameScheduler, Instant, LevelFilter, OutputDriver, RenderingBounds, Rgb, Strip,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Maximum number of LEDs the preview supports
const MAX_LEDS: usize = 180;

/// Maximum number of simultaneous eyes
const MAX_EYES: usize = 24;

/// Default number of LEDs in the simulated strip
const DEFAULT_LED_COUNT: usize = 60;

/// Default number of eyes
const DEFAULT_EYE_COUNT: usize = 6;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 12.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

/// Shared strip all eyes draw into
static STRIP: Strip<MAX_LEDS> = Strip::new();

/// Output driver that keeps the last flushed frame for painting
#[derive(Default)]
struct PreviewOutput {
    frame: Vec<Rgb>,
}

impl OutputDriver for PreviewOutput {
    fn write(&mut self, colors: &[Rgb]) {
        self.frame.clear();
        self.frame.extend_from_slice(colors);
    }
}

type PreviewScheduler = FrameScheduler<'static, PreviewOutput, SmallRng, MAX_LEDS, MAX_EYES>;

fn main() -> eframe::Result<()> {
    // Per-eye levels do the filtering, so let every record through
    env_logger::Builder::new()
        .filter_level(LevelFilter::Trace)
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 400.0])
            .with_title("Eyeblink Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "eyeblink-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    /// Host loop driving every eye
    scheduler: PreviewScheduler,

    // UI state
    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Whether animation is playing
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    /// Color for newly spawned eyes (RGB)
    color: [u8; 3],
    /// Distance between the two pixels of an eye
    separation: u8,
    /// Number of eyes to keep on the strip
    eye_count: usize,
    /// Diagnostic verbosity applied to every eye
    log_level: LevelFilter,
    /// LED pixel size for display
    led_size: f32,
    /// Number of LEDs to display
    led_count: usize,
}

impl PreviewApp {
    fn new() -> Self {
        #[allow(clippy::cast_possible_truncation)]
        let bounds = RenderingBounds::new(0, DEFAULT_LED_COUNT as u16);
        let scheduler = PreviewScheduler::new(
            &STRIP,
            PreviewOutput::default(),
            SmallRng::seed_from_u64(0x00E7_EB11),
            bounds,
        );

        let mut app = Self {
            scheduler,
            t_ms: 0,
            last_frame: StdInstant::now(),
            playing: true,
            // Eyes rest for tens of seconds, so start fast
            time_scale: 4.0,
            color: [255, 40, 0],
            separation: 2,
            eye_count: DEFAULT_EYE_COUNT,
            log_level: LevelFilter::Off,
            led_size: LED_SIZE,
            led_count: DEFAULT_LED_COUNT,
        };
        app.sync_eye_count();
        app
    }

    fn now(&self) -> Instant {
        Instant::from_millis(self.t_ms)
    }

    fn current_color(&self) -> Rgb {
        Rgb::new(self.color[0], self.color[1], self.color[2])
    }

    /// Spawn or remove eyes until the requested count is reached
    fn sync_eye_count(&mut self) {
        let now = self.now();
        let color = self.current_color();
        while self.scheduler.eyes().len() < self.eye_count {
            if self
                .scheduler
                .spawn_random(color, self.separation, now)
                .is_err()
            {
                break;
            }
        }
        while self.scheduler.eyes().len() > self.eye_count {
            let last = self.scheduler.eyes().len() - 1;
            self.scheduler.remove(last);
        }
        self.apply_log_level();
    }

    fn apply_log_level(&mut self) {
        for eye in self.scheduler.eyes_mut() {
            eye.set_log_level(self.log_level);
        }
    }

    /// Recolor every eye and re-arm it
    fn apply_color(&mut self) {
        let now = self.now();
        let color = self.current_color();
        for eye in self.scheduler.eyes_mut() {
            eye.set_color(color);
            eye.reset(now);
        }
    }

    /// Replace every eye with a freshly placed one
    fn respawn(&mut self) {
        self.scheduler.clear();
        self.sync_eye_count();
    }

    /// Reset time to zero
    fn reset_time(&mut self) {
        self.t_ms = 0;
        self.last_frame = StdInstant::now();
        self.respawn();
    }

    /// Toggle playing state
    fn toggle_playing(&mut self) {
        self.playing = !self.playing;
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.playing {
            let delta_ms_f64 = delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
            let delta_ms_f64 = if delta_ms_f64.is_finite() {
                #[allow(clippy::cast_precision_loss)]
                delta_ms_f64.clamp(0.0, u64::MAX as f64)
            } else {
                0.0
            };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let delta_ms = delta_ms_f64 as u64;
            self.t_ms = self.t_ms.wrapping_add(delta_ms);
        }
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Update synthetic time
        self.update_time();

        // Advance every eye using synthetic time
        self.scheduler.tick(self.now());
        let frame = self.scheduler.output().frame.clone();

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                // <PlaybackControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        if ui.button("⏮ Reset").clicked() {
                            self.reset_time();
                        }
                        if ui
                            .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                            .clicked()
                        {
                            self.toggle_playing();
                        }
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        let secs = self.t_ms / 1000;
                        let ms = self.t_ms % 1000;
                        ui.label(format!("Time: {secs}.{ms:03}s"));
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Speed:");
                        ui.add(egui::Slider::new(&mut self.time_scale, 0.1..=20.0).logarithmic(true));
                    });
                });
                // </PlaybackControls>
                ui.add_space(16.0);
                // <StripControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label("Size: ");
                        ui.add(egui::Slider::new(&mut self.led_size, 4.0..=32.0));
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("LEDs:");
                        let old_led_count = self.led_count;
                        ui.add(egui::Slider::new(&mut self.led_count, 4usize..=MAX_LEDS));
                        if self.led_count != old_led_count {
                            let end = u16::try_from(self.led_count).unwrap_or(u16::MAX);
                            self.scheduler.set_bounds(RenderingBounds::new(0, end));
                            self.respawn();
                        }
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Eyes:");
                        let old_eye_count = self.eye_count;
                        ui.add(egui::Slider::new(&mut self.eye_count, 0usize..=MAX_EYES));
                        if self.eye_count != old_eye_count {
                            self.sync_eye_count();
                        }
                    });
                });
                // </StripControls>
            });

            ui.add_space(16.0);

            ui.horizontal(|ui| {
                ui.label("Color:");
                let old_color = self.color;
                if ui.color_edit_button_srgb(&mut self.color).changed() && old_color != self.color {
                    self.apply_color();
                }

                ui.add_space(8.0);

                ui.label("Separation:");
                let old_separation = self.separation;
                ui.add(egui::DragValue::new(&mut self.separation).range(1u8..=8u8));
                if self.separation != old_separation {
                    self.respawn();
                }

                ui.add_space(8.0);

                ui.label("Log:");
                let old_level = self.log_level;
                egui::ComboBox::from_id_salt("log_level_selector")
                    .selected_text(self.log_level.as_str())
                    .show_ui(ui, |ui| {
                        for level in LevelFilter::iter() {
                            ui.selectable_value(&mut self.log_level, level, level.as_str());
                        }
                    });
                if self.log_level != old_level {
                    self.apply_log_level();
                }
            });

            ui.add_space(16.0);

            // === LED Display ===
            let visible = &frame[..self.led_count.min(frame.len())];
            let available_width = ui.available_width();
            let led_pitch = self.led_size + LED_GAP;

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let leds_per_row = (available_width / led_pitch).floor().max(1.0) as usize;
            let rows = visible.len().div_ceil(leds_per_row);
            #[allow(clippy::cast_precision_loss)]
            let height = rows as f32 * led_pitch;

            let (response, painter) =
                ui.allocate_painter(egui::vec2(available_width, height), egui::Sense::hover());
            let origin = response.rect.min;

            #[allow(clippy::cast_precision_loss)]
            for (i, pixel) in visible.iter().enumerate() {
                let row = i / leds_per_row;
                let col = i % leds_per_row;
                let x = origin.x + col as f32 * led_pitch;
                let y = origin.y + row as f32 * led_pitch;

                let rect = egui::Rect::from_min_size(
                    egui::pos2(x, y),
                    egui::vec2(self.led_size, self.led_size),
                );
                let color = egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
                painter.rect_filled(rect, 3.0, color);
            }
        });
    }
}
