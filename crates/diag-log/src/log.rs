use crate::color::{Channel, Color};
use crate::config::LogConfig;
use crate::sink::{LogSink, StdoutSink};
use crate::LogError;
use owo_colors::OwoColorize;
use std::fmt::{self, Display};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};

/// Toggleable, color-coded console log.
///
/// Every channel method reads the enabled flag once and, when enabled, writes
/// the message as a single line. Toggling takes `&self`, so one instance can
/// be shared behind an `Arc` and switched from any thread.
pub struct Log {
    enabled: AtomicBool,
    color: bool,
    sink: Arc<dyn LogSink>,
}

impl Log {
    /// Log writing to stdout.
    pub fn new(enabled: bool) -> Self {
        Self::with_sink(enabled, Arc::new(StdoutSink))
    }

    pub fn from_config(config: &LogConfig) -> Self {
        Self::new(config.enabled).with_color(config.color)
    }

    pub fn with_sink(enabled: bool, sink: Arc<dyn LogSink>) -> Self {
        Self {
            enabled: AtomicBool::new(enabled),
            color: true,
            sink,
        }
    }

    /// Disables ANSI styling when `false`; messages are written as plain text.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn enable(&self) {
        self.enabled.store(true, Ordering::Relaxed);
        debug!("diagnostic log enabled");
    }

    pub fn disable(&self) {
        self.enabled.store(false, Ordering::Relaxed);
        debug!("diagnostic log disabled");
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    pub fn emit(&self, channel: Channel, parts: &[&dyn Display]) {
        self.print(channel.color(), parts);
    }

    pub fn ok(&self, parts: &[&dyn Display]) {
        self.emit(Channel::Ok, parts);
    }

    pub fn success(&self, parts: &[&dyn Display]) {
        self.emit(Channel::Success, parts);
    }

    pub fn error(&self, parts: &[&dyn Display]) {
        self.emit(Channel::Error, parts);
    }

    pub fn warn(&self, parts: &[&dyn Display]) {
        self.emit(Channel::Warn, parts);
    }

    pub fn info(&self, parts: &[&dyn Display]) {
        self.emit(Channel::Info, parts);
    }

    pub fn debug(&self, parts: &[&dyn Display]) {
        self.emit(Channel::Debug, parts);
    }

    pub fn banner(&self, parts: &[&dyn Display]) {
        self.emit(Channel::Banner, parts);
    }

    pub fn banner_blue(&self, parts: &[&dyn Display]) {
        self.emit(Channel::BannerBlue, parts);
    }

    pub fn banner_magenta(&self, parts: &[&dyn Display]) {
        self.emit(Channel::BannerMagenta, parts);
    }

    pub fn banner_inverse(&self, parts: &[&dyn Display]) {
        self.emit(Channel::BannerInverse, parts);
    }

    /// Logs with an arbitrary entry of the color table.
    pub fn custom(&self, color: Color, parts: &[&dyn Display]) {
        self.print(color, parts);
    }

    /// Logs with a color looked up by its table key.
    ///
    /// Unknown keys are rejected whether or not the log is enabled, and
    /// nothing is written for them.
    pub fn custom_named(&self, name: &str, parts: &[&dyn Display]) -> Result<(), LogError> {
        let color = name.parse::<Color>().map_err(|err| {
            warn!(color = name, "rejected diagnostic log color");
            err
        })?;
        self.print(color, parts);
        Ok(())
    }

    fn print(&self, color: Color, parts: &[&dyn Display]) {
        if !self.is_enabled() {
            return;
        }
        self.sink.write_line(&self.render(color, parts));
    }

    /// Formats one line: parts joined by spaces, styled, reset, newline.
    pub fn render(&self, color: Color, parts: &[&dyn Display]) -> String {
        let message = parts
            .iter()
            .map(|part| part.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        if self.color {
            format!("{}\n", message.style(color.style()))
        } else {
            format!("{message}\n")
        }
    }
}

impl Default for Log {
    fn default() -> Self {
        Self::from_config(&LogConfig::default())
    }
}

impl fmt::Debug for Log {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Log")
            .field("enabled", &self.is_enabled())
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}

/// Variadic call form for the channel methods.
///
/// ```rust
/// use diag_log::{diag, Log};
///
/// let log = Log::new(false);
/// let port = 3000;
/// diag!(log, ok, "api running on port", port);
/// diag!(log, banner_inverse);
/// ```
#[macro_export]
macro_rules! diag {
    ($log:expr, $channel:ident $(, $part:expr)* $(,)?) => {
        $log.$channel(&[$(&$part as &dyn ::std::fmt::Display),*])
    };
}
