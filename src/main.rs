use std::path::PathBuf;
use std::time::Duration;

use eframe::egui;

use inferdesk::display::render_response;
use inferdesk::engine::{EnginePoll, EngineState, RunEngine, RunRequest, TaskKind};
use inferdesk::runners::Runners;

const TOP_K: usize = 5;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([960.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Inferdesk",
        options,
        Box::new(|_cc| Ok(Box::new(DeskApp::new()))),
    )
}

struct DeskApp {
    engine: RunEngine,
    task: TaskKind,
    text_input: String,
    image_path: String,
    output: String,
}

impl DeskApp {
    fn new() -> Self {
        Self {
            engine: RunEngine::new(Runners::default()),
            task: TaskKind::Text,
            text_input: String::new(),
            image_path: String::new(),
            output: String::new(),
        }
    }

    // Snapshot of the form at the moment Run is clicked.
    fn current_request(&self) -> RunRequest {
        match self.task {
            TaskKind::Text => RunRequest::Text {
                input: self.text_input.clone(),
            },
            TaskKind::Image => {
                let path = self.image_path.trim();
                RunRequest::Image {
                    path: (!path.is_empty()).then(|| PathBuf::from(path)),
                    top_k: TOP_K,
                }
            }
        }
    }
}

impl eframe::App for DeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        match self.engine.try_poll() {
            EnginePoll::Ready(response) => {
                self.output = render_response(&response);
            }
            EnginePoll::Empty(EngineState::Running) => {
                ctx.request_repaint_after(Duration::from_millis(100));
            }
            EnginePoll::Empty(EngineState::Idle) => {}
            EnginePoll::Error(message) => {
                self.output = message;
            }
        }

        let running = self.engine.state() == EngineState::Running;

        egui::SidePanel::right("model_info")
            .default_width(280.0)
            .show(ctx, |ui| {
                ui.heading("Model Info");
                ui.add_space(4.0);
                ui.label("text (sentiment):");
                ui.monospace("clapAI/modernBERT-base-multilingual-sentiment");
                ui.add_space(4.0);
                ui.label("image (classifier):");
                ui.monospace("google/vit-base-patch16-224");
                ui.separator();
                ui.label(
                    "Models download on first run and stay loaded for the rest of the session.",
                );
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Task:");
                egui::ComboBox::from_id_salt("task")
                    .selected_text(task_label(self.task))
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut self.task, TaskKind::Text, task_label(TaskKind::Text));
                        ui.selectable_value(&mut self.task, TaskKind::Image, task_label(TaskKind::Image));
                    });

                if ui.add_enabled(!running, egui::Button::new("Run")).clicked() {
                    self.output = "loading...".into();
                    if let Err(e) = self.engine.schedule(self.current_request()) {
                        self.output = e.to_string();
                    }
                    ctx.request_repaint_after(Duration::from_millis(100));
                }

                if running {
                    ui.spinner();
                }
            });

            ui.add_space(8.0);
            match self.task {
                TaskKind::Text => {
                    ui.label("Input text:");
                    ui.add(
                        egui::TextEdit::multiline(&mut self.text_input)
                            .desired_rows(4)
                            .desired_width(f32::INFINITY),
                    );
                }
                TaskKind::Image => {
                    ui.label("Image path:");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.image_path)
                            .desired_width(f32::INFINITY),
                    );
                }
            }

            ui.add_space(8.0);
            ui.label("Output:");
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut self.output.as_str())
                        .desired_rows(14)
                        .desired_width(f32::INFINITY),
                );
            });
        });
    }
}

fn task_label(task: TaskKind) -> &'static str {
    match task {
        TaskKind::Text => "Text (Sentiment)",
        TaskKind::Image => "Image (Classifier)",
    }
}
