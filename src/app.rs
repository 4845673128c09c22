//! Application state and logic.

use std::collections::VecDeque;
use std::path::Path;

use crate::command::{Command, Menu, MenuReply};
use crate::data::{
    CoordinateSystem, Curve, CurveStore, DomainPolicy, MathFunction, PlotCollection, Sampler,
    TrigKind,
};
use crate::error::Result;
use crate::ui::Viewport;
use crate::util::PlotConfig;

/// Messages kept in the log; older ones are dropped first.
pub const MESSAGE_LOG_LIMIT: usize = 200;

/// Severity of a user-visible message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Normal feedback.
    Info,
    /// Something was skipped or ignored.
    Warning,
    /// A command failed.
    Error,
}

/// A line in the message log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Severity.
    pub level: Level,
    /// Text shown to the user.
    pub text: String,
}

/// Startup options.
#[derive(Debug, Clone)]
pub struct AppOptions {
    /// Sampling failure policy.
    pub policy: DomainPolicy,
    /// Stretch the current ranges over the canvas instead of 20 px/unit.
    pub fit_viewport: bool,
    /// Draw tick and axis labels.
    pub show_labels: bool,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            policy: DomainPolicy::SkipUndefined,
            fit_viewport: false,
            show_labels: true,
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Visible ranges.
    pub coords: CoordinateSystem,
    /// Displayed curves.
    pub plots: PlotCollection,
    /// Menu state machine.
    pub menu: Menu,
    /// Commands waiting to be applied.
    pub queue: VecDeque<Command>,
    /// Layout and sampling configuration.
    pub config: PlotConfig,
    /// Sampler used for every curve.
    pub sampler: Sampler,
    /// Startup options.
    pub options: AppOptions,
    /// Text typed at the prompt.
    pub input: String,
    /// Message log, oldest first, at most [`MESSAGE_LOG_LIMIT`] entries.
    pub messages: Vec<Message>,
    /// Messages recorded since startup, including dropped ones.
    pub messages_total: usize,
    /// Cleared by the exit command.
    pub running: bool,
    /// Set once the missing-labels notice has been logged.
    pub labels_notice_logged: bool,
}

impl App {
    /// Create an application with an empty collection.
    pub fn new(config: PlotConfig, options: AppOptions) -> Self {
        Self {
            coords: CoordinateSystem::default(),
            plots: PlotCollection::new(),
            menu: Menu::new(),
            queue: VecDeque::new(),
            sampler: Sampler::new(options.policy),
            config,
            options,
            input: String::new(),
            messages: Vec::new(),
            messages_total: 0,
            running: true,
            labels_notice_logged: false,
        }
    }

    /// Create an application showing `1 - x^2` and `sin(x)`.
    pub fn with_default_curves(config: PlotConfig, options: AppOptions) -> Self {
        let mut app = Self::new(config, options);
        let defaults = [
            MathFunction::polynomial(vec![1.0, 0.0, -1.0]),
            MathFunction::trigonometric(TrigKind::Sin, 1.0, 1.0, 0.0),
        ];

        for function in defaults {
            match Curve::sample(
                function,
                &app.sampler,
                app.coords.x_range(),
                app.config.sampling.num_points,
            ) {
                Ok((curve, _)) => app.plots.add(curve),
                Err(e) => app.error(format!("Failed to plot default curve: {}", e)),
            }
        }

        app.info("Ready");
        app
    }

    /// Feed one line of user input to the menu.
    pub fn submit_line(&mut self, line: &str) {
        match self.menu.submit(line) {
            Ok(MenuReply::Prompt(prompt)) => {
                tracing::debug!("Prompting: {}", prompt);
            },
            Ok(MenuReply::Command(command)) => {
                tracing::debug!("Queued {:?}", command);
                self.queue.push_back(command);
            },
            Ok(MenuReply::Cancelled) => self.info("Cancelled"),
            Err(e) => self.error(e.to_string()),
        }
    }

    /// Apply every queued command in order.
    pub fn process_commands(&mut self) {
        while let Some(command) = self.queue.pop_front() {
            if let Err(e) = self.apply(command) {
                self.error(e.to_string());
            }
        }
    }

    /// Apply one command.
    pub fn apply(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Plot(function) => self.plot(function),
            Command::ChangeRange { x, y } => {
                self.coords.set_ranges(x, y);
                self.regenerate();
                Ok(())
            },
            Command::Clear => {
                self.plots.clear();
                self.info("Plots cleared");
                Ok(())
            },
            Command::Save(path) => self.save(&path),
            Command::Load(path) => self.load(&path),
            Command::Exit => {
                tracing::info!("Exit requested");
                self.running = false;
                Ok(())
            },
        }
    }

    fn plot(&mut self, function: MathFunction) -> Result<()> {
        if let MathFunction::Trigonometric {
            kind: TrigKind::Unknown(ref name),
            ..
        } = function
        {
            self.warn(format!(
                "Unknown trigonometric kind '{}', plotting as 0",
                name
            ));
        }

        let (curve, skipped) = Curve::sample(
            function,
            &self.sampler,
            self.coords.x_range(),
            self.config.sampling.num_points,
        )?;
        let label = curve.label();

        self.plots.clear();
        self.plots.add(curve);

        tracing::info!("Plotted {}", label);
        self.info(format!("Plotted {}", label));
        if skipped > 0 {
            self.warn(format!("{} samples outside the domain skipped", skipped));
        }
        Ok(())
    }

    fn regenerate(&mut self) {
        let range = self.coords.x_range();
        let report = self.plots.regenerate(
            &self.sampler,
            range,
            self.config.sampling.num_points,
        );

        self.info(format!(
            "Range set to x {} y {}; {} curves resampled",
            range,
            self.coords.y_range(),
            report.regenerated
        ));
        if report.raw > 0 {
            self.warn(format!(
                "{} loaded curves have no function and were not resampled",
                report.raw
            ));
        }
        if report.skipped_samples > 0 {
            self.warn(format!(
                "{} samples outside the domain skipped",
                report.skipped_samples
            ));
        }
        for (label, reason) in report.failures {
            self.error(format!("Could not resample {}: {}", label, reason));
        }
    }

    fn save(&mut self, path: &Path) -> Result<()> {
        let count = CurveStore::save(path, &self.plots)?;
        self.info(format!("Saved {} curves to {}", count, path.display()));
        Ok(())
    }

    fn load(&mut self, path: &Path) -> Result<()> {
        let report = CurveStore::load(path)?;
        let loaded = report.curves.len();
        self.plots.replace(report.curves);

        self.info(format!("Loaded {} curves from {}", loaded, path.display()));
        if !report.skipped.is_empty() {
            for skipped in &report.skipped {
                self.warn(format!("Line {}: {}", skipped.line, skipped.reason));
            }
            self.warn(format!("{} lines skipped", report.skipped.len()));
        }
        Ok(())
    }

    /// Viewport for the current options and ranges.
    pub fn viewport(&self) -> Viewport {
        if self.options.fit_viewport {
            Viewport::fit(
                &self.config.viewport,
                self.coords.x_range(),
                self.coords.y_range(),
            )
        } else {
            Viewport::fixed(&self.config.viewport)
        }
    }

    /// Latest message text, for the status bar.
    pub fn status(&self) -> &str {
        self.messages.last().map(|m| m.text.as_str()).unwrap_or("")
    }

    /// Record an informational message.
    pub fn info(&mut self, text: impl Into<String>) {
        self.push(Level::Info, text.into());
    }

    /// Record a warning.
    pub fn warn(&mut self, text: impl Into<String>) {
        let text = text.into();
        tracing::warn!("{}", text);
        self.push(Level::Warning, text);
    }

    /// Record an error.
    pub fn error(&mut self, text: impl Into<String>) {
        let text = text.into();
        tracing::error!("{}", text);
        self.push(Level::Error, text);
    }

    /// Messages recorded after the first `seen` ones that are still in the log.
    pub fn messages_after(&self, seen: usize) -> &[Message] {
        let first_kept = self.messages_total - self.messages.len();
        let start = seen.saturating_sub(first_kept).min(self.messages.len());
        &self.messages[start..]
    }

    fn push(&mut self, level: Level, text: String) {
        self.messages.push(Message { level, text });
        self.messages_total += 1;
        if self.messages.len() > MESSAGE_LOG_LIMIT {
            let excess = self.messages.len() - MESSAGE_LOG_LIMIT;
            self.messages.drain(..excess);
        }
    }
}
