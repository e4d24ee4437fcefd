//! Single-line progress bar that overwrites itself in place.

use std::io::Write;

use console::Term;
use statusdash_core::format::{display_percent, percentage, render_bar, render_full_bar};
use statusdash_core::{AttributeValue, BarConfig, BarWidth, DashError, Result};

/// A progress bar printed on one line of an output stream.
///
/// Every update rewrites the line followed by a carriage return;
/// [`finish`](Self::finish) prints the full bar and a newline.
pub struct StandaloneProgressBar<W: Write = Term> {
    writer: W,
    name: String,
    max_value: i64,
    width: usize,
    value: AttributeValue,
    percentage: f64,
    finished: bool,
}

impl StandaloneProgressBar<Term> {
    /// Create a bar on stdout and draw it at 0%.
    ///
    /// `width` is `-1` for automatic sizing from the terminal width, or a
    /// positive number of cells.
    pub fn new(name: &str, max_value: i64, width: i64) -> Result<Self> {
        let config = BarConfig::new(name)
            .with_max_value(max_value)
            .with_width(BarWidth::from_raw(width)?);
        Self::create(&config)
    }

    /// Create a bar on stdout from a prepared configuration.
    pub fn create(config: &BarConfig) -> Result<Self> {
        let term = Term::stdout();
        let (_rows, columns) = term.size();
        Self::with_writer(term, columns, config)
    }
}

impl<W: Write> StandaloneProgressBar<W> {
    /// Create a bar writing to `writer`, sized against `columns`, and draw it
    /// at 0%.
    pub fn with_writer(writer: W, columns: u16, config: &BarConfig) -> Result<Self> {
        config.validate()?;
        let width = config.width.resolve(columns, &config.name);
        tracing::debug!(name = %config.name, width, "created progress bar");

        let mut bar = Self {
            writer,
            name: config.name.clone(),
            max_value: config.max_value,
            width,
            value: AttributeValue::default(),
            percentage: 0.0,
            finished: false,
        };
        bar.draw()?;
        Ok(bar)
    }

    /// Set a new value and redraw. Values past either end are shown as-is.
    pub fn update(&mut self, value: impl Into<AttributeValue>) -> Result<()> {
        if self.finished {
            return Err(DashError::NotOpen);
        }
        let value = value.into();
        let number = value.as_number().ok_or_else(|| DashError::NonNumericValue {
            name: self.name.clone(),
            value: value.to_string(),
        })?;

        self.percentage = percentage(number, self.max_value);
        self.value = value;
        self.draw()
    }

    /// Draw the completely filled bar at 100% and end the line.
    pub fn finish(&mut self) -> Result<()> {
        if self.finished {
            return Err(DashError::NotOpen);
        }
        writeln!(
            self.writer,
            "{} Progress: [{}] 100%",
            self.name,
            render_full_bar(self.width)
        )?;
        self.writer.flush()?;
        self.finished = true;
        Ok(())
    }

    /// The line as currently drawn, without the trailing carriage return.
    #[must_use]
    pub fn line(&self) -> String {
        format!(
            "{} Progress: [{}] {}%",
            self.name,
            render_bar(self.percentage, self.width),
            display_percent(self.percentage)
        )
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    #[must_use]
    pub fn value(&self) -> &AttributeValue {
        &self.value
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    fn draw(&mut self) -> Result<()> {
        let line = self.line();
        write!(self.writer, "{line}\r")?;
        self.writer.flush()?;
        Ok(())
    }
}
