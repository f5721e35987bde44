use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use owo_colors::{OwoColorize, Stream, Style};
use std::cell::RefCell;
use std::io::{self, Write};

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// stdout carries the rendered graph, so every diagnostic goes to stderr.
/// Discovery progress is drawn with an indicatif bar. Lines reported while
/// the bar is live are written with the bar suspended, so they reach stderr
/// even when indicatif hides the bar on a non-terminal.
pub struct StderrProgressReporter {
    progress_bar: RefCell<Option<ProgressBar>>,
    output: RefCell<Box<dyn Write + Send>>,
    /// Only the real stderr is checked for colour support
    detect_colour: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: RefCell::new(None),
            output: RefCell::new(Box::new(io::stderr())),
            detect_colour: true,
        }
    }

    /// Writes plain, uncoloured lines to `output` and never draws a bar
    pub fn with_output(output: impl Write + Send + 'static) -> Self {
        Self {
            progress_bar: RefCell::new(None),
            output: RefCell::new(Box::new(output)),
            detect_colour: false,
        }
    }

    fn get_or_create_progress_bar(&self, total: usize) -> ProgressBar {
        let mut pb_option = self.progress_bar.borrow_mut();
        if let Some(pb) = pb_option.as_ref() {
            pb.set_length(total as u64);
            return pb.clone();
        }

        let target = if self.detect_colour {
            ProgressDrawTarget::stderr()
        } else {
            ProgressDrawTarget::hidden()
        };
        let pb = ProgressBar::with_draw_target(Some(total as u64), target);
        let style = ProgressStyle::default_bar()
            .template("   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} - {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-");
        pb.set_style(style);
        *pb_option = Some(pb.clone());
        pb
    }

    fn clear_progress_bar(&self) {
        if let Some(pb) = self.progress_bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.detect_colour {
            text.if_supports_color(Stream::Stderr, |t| t.style(style))
                .to_string()
        } else {
            text.to_string()
        }
    }

    fn emit(&self, line: &str) {
        let write = || {
            // Diagnostics are best effort once stderr is gone
            let _ = writeln!(self.output.borrow_mut(), "{}", line);
        };
        match self.progress_bar.borrow().as_ref() {
            Some(pb) => pb.suspend(write),
            None => write(),
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        self.emit(message);
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let pb = self.get_or_create_progress_bar(total);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
        if current >= total {
            self.clear_progress_bar();
        }
    }

    fn report_error(&self, message: &str) {
        let line = format!("⚠️  {}", message);
        self.emit(&self.paint(&line, Style::new().yellow()));
    }

    fn report_completion(&self, message: &str) {
        self.clear_progress_bar();
        self.emit(&self.paint(message, Style::new().green()));
    }
}
