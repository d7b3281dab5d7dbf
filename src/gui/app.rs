// src/gui/app.rs
use std::{error::Error, time::Instant};

use eframe::egui;

use crate::{
    config::{
        consts::MAX_CATCHUP_TICKS,
        options::{VariantKind, VisualOptions},
    },
    engine::{AnimationDriver, Flow, FrameClock, Rgb, Signal},
    load::{self, Dataset},
    progress::ConsoleProgress,
};

use super::{icon, paint, router, scenes::Scene};

/// Fetch the variant's data, then open its window. Blocks until closed.
pub fn launch(kind: VariantKind) -> Result<(), Box<dyn Error>> {
    let opts = VisualOptions::for_variant(kind);
    let mut progress = ConsoleProgress;
    let data = load::collect(&opts, Some(&mut progress))?;
    run(opts, data)
}

pub fn run(opts: VisualOptions, data: Dataset) -> Result<(), Box<dyn Error>> {
    let native = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(opts.window_title.clone())
            .with_inner_size([opts.width, opts.height])
            .with_resizable(false)
            .with_icon(icon::app_icon()),
        ..Default::default()
    };
    let title = opts.window_title.clone();
    logf!("Init: {} ({} records)", title, data.len());

    eframe::run_native(
        &title,
        native,
        Box::new(|_cc| Ok(Box::new(App::new(opts, data)))),
    )?;
    Ok(())
}

pub struct App {
    opts: VisualOptions,
    driver: AnimationDriver,
    clock: FrameClock,
    scene: Box<dyn Scene>,
}

impl App {
    pub fn new(opts: VisualOptions, data: Dataset) -> Self {
        let driver = AnimationDriver::new(opts.cadence);
        let clock = FrameClock::new(driver.interval(), Instant::now(), MAX_CATCHUP_TICKS);
        let scene = router::scene_for(opts.clone(), data);
        logd!("Init: scene={}", scene.label());
        Self { opts, driver, clock, scene }
    }

    /// Runs the due ticks. `signal` is seen by the first one only; a stop
    /// ends the batch.
    fn step(&mut self, signal: Signal) -> Flow {
        let due = self.clock.due(Instant::now());
        if signal == Signal::Quit {
            return self.driver.tick(signal, |_, _| {});
        }
        let scene = &mut self.scene;
        for _ in 0..due {
            if self.driver.tick(Signal::None, |state, frame| scene.on_tick(state, frame)) == Flow::Stop {
                return Flow::Stop;
            }
        }
        Flow::Continue
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut signal = Signal::None;
        ctx.input(|i| {
            if i.viewport().close_requested() || i.key_pressed(egui::Key::Escape) {
                signal = Signal::Quit;
            }
            self.scene.on_input(i);
        });

        self.scene.draw_panels(ctx);

        let bg = paint::color(Rgb::from_bytes(self.opts.background));
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(bg))
            .show(ctx, |ui| {
                let size = egui::vec2(self.opts.width, self.opts.height);
                let (response, painter) = ui.allocate_painter(size, egui::Sense::click());
                let origin = response.rect.min;
                let state = *self.driver.state();

                self.scene.paint(&painter, origin, &state);

                if response.clicked() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        let local = pos - origin;
                        self.scene.on_click((local.x as f64, local.y as f64), &state);
                    }
                }

                if self.scene.draw_overlay(ui, origin) == Signal::Quit {
                    signal = Signal::Quit;
                }
            });

        if self.step(signal) == Flow::Stop {
            logf!("Quit: frame={}", self.driver.frame());
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }
        ctx.request_repaint_after(self.driver.interval());
    }
}
