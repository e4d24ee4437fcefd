//! Attribute dashboard: a registry of typed values redrawn on every update.

use std::io::Stdout;

use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::Size;
use ratatui::Terminal;
use statusdash_core::{
    AttributeKind, AttributeRegistry, AttributeValue, DashError, DashboardConfig,
    DisplayAttribute, LogSink, Result,
};
use tracing::{debug, trace, warn};

use crate::styles::ColorTheme;
use crate::terminal::{enter_display_mode, leave_display_mode};
use crate::view::render_view;

/// Dashboard drawing to the real terminal.
pub type TerminalDashboard = Dashboard<CrosstermBackend<Stdout>>;

/// Full-screen status window.
///
/// Attributes are drawn top to bottom in registration order. Every update
/// redraws the whole viewport synchronously; nothing redraws in the
/// background.
pub struct Dashboard<B: Backend> {
    terminal: Terminal<B>,
    header: String,
    registry: AttributeRegistry,
    log: Option<LogSink>,
    theme: ColorTheme,
    viewport: Size,
    alternate_screen: bool,
    open: bool,
}

impl Dashboard<CrosstermBackend<Stdout>> {
    /// Take over the terminal: alternate screen, hidden cursor.
    ///
    /// The log file is opened first, so an unwritable path fails before the
    /// screen is touched.
    pub fn open(config: &DashboardConfig) -> Result<Self> {
        let log = open_log(config)?;
        let terminal = enter_display_mode()?;
        match Self::assemble(terminal, config, log, true) {
            Ok(dashboard) => Ok(dashboard),
            Err(e) => {
                let _ = leave_display_mode();
                Err(e)
            }
        }
    }
}

impl<B: Backend> Dashboard<B> {
    /// Open a dashboard over any ratatui backend without switching screens.
    pub fn with_backend(backend: B, config: &DashboardConfig) -> Result<Self> {
        let log = open_log(config)?;
        let terminal = Terminal::new(backend)?;
        Self::assemble(terminal, config, log, false)
    }

    fn assemble(
        mut terminal: Terminal<B>,
        config: &DashboardConfig,
        log: Option<LogSink>,
        alternate_screen: bool,
    ) -> Result<Self> {
        terminal.hide_cursor()?;
        let viewport = terminal.size()?;
        debug!(
            header = %config.header,
            columns = viewport.width,
            rows = viewport.height,
            "opened dashboard"
        );
        Ok(Self {
            terminal,
            header: config.header.clone(),
            registry: AttributeRegistry::new(),
            log,
            theme: ColorTheme::from_env(),
            viewport,
            alternate_screen,
            open: true,
        })
    }

    /// Replace the style pairs.
    #[must_use]
    pub fn with_theme(mut self, theme: ColorTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Register an attribute with value `0`. Does not redraw.
    ///
    /// Bounded kinds need `max_value > 0`; a progress bar's width is fixed
    /// from the current viewport width.
    pub fn add_attribute(
        &mut self,
        name: &str,
        kind: AttributeKind,
        logged: bool,
        max_value: i64,
    ) -> Result<()> {
        self.ensure_open()?;
        self.ensure_unregistered(name)?;
        let attr = DisplayAttribute::new(name, kind, logged, max_value, self.viewport.width)?;
        self.registry.insert(attr)
    }

    /// Register an attribute from a textual kind tag such as `"Division"`.
    pub fn add_attribute_tag(
        &mut self,
        name: &str,
        tag: &str,
        logged: bool,
        max_value: i64,
    ) -> Result<()> {
        self.ensure_open()?;
        self.ensure_unregistered(name)?;
        let kind = tag.parse::<AttributeKind>()?;
        self.add_attribute(name, kind, logged, max_value)
    }

    /// Set one attribute's value, log it if the attribute is logged, redraw.
    ///
    /// On error nothing is stored.
    pub fn update_attribute(&mut self, name: &str, value: impl Into<AttributeValue>) -> Result<()> {
        self.ensure_open()?;
        let value = value.into();
        let attr = self.registry.check_update(name, &value)?;
        if attr.is_logged() {
            if let Some(log) = self.log.as_mut() {
                log.write_record(&format!("{name}: {value}"))?;
            }
        }
        self.registry.set_value(name, value)?;
        self.render()
    }

    /// Set several attributes and redraw once.
    ///
    /// Every name and value is checked before anything is stored. Log writes
    /// are best-effort: the first failure is returned after the redraw, and
    /// the stored values stay.
    pub fn update_many<I, K, V>(&mut self, batch: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<AttributeValue>,
    {
        self.ensure_open()?;
        let batch: Vec<(K, AttributeValue)> = batch
            .into_iter()
            .map(|(name, value)| (name, value.into()))
            .collect();
        if batch.is_empty() {
            return Ok(());
        }
        for (name, value) in &batch {
            self.registry.check_update(name.as_ref(), value)?;
        }

        let mut log_error = None;
        for (name, value) in batch {
            let attr = self.registry.set_value(name.as_ref(), value)?;
            if !attr.is_logged() {
                continue;
            }
            let record = attr.log_record();
            if let Some(log) = self.log.as_mut() {
                if let Err(e) = log.write_record(&record) {
                    warn!(record = %record, error = %e, "failed to log update");
                    log_error.get_or_insert(e);
                }
            }
        }

        self.render()?;
        log_error.map_or(Ok(()), Err)
    }

    /// Redraw the whole viewport at its current size.
    pub fn render(&mut self) -> Result<()> {
        self.ensure_open()?;
        let header = &self.header;
        let registry = &self.registry;
        let theme = &self.theme;
        let completed = self
            .terminal
            .draw(|frame| render_view(frame, header, registry, theme))?;
        self.viewport = Size::new(completed.area.width, completed.area.height);
        trace!(
            columns = self.viewport.width,
            rows = self.viewport.height,
            attributes = self.registry.len(),
            "rendered dashboard"
        );
        Ok(())
    }

    /// Drop every attribute and blank the screen. The dashboard stays open.
    pub fn reset(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.registry.clear();
        self.terminal.clear()?;
        debug!("reset dashboard");
        Ok(())
    }

    /// Close the log, drop every attribute and give the terminal back.
    pub fn close(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.open = false;
        self.registry.clear();

        let log_result = self.log.take().map_or(Ok(()), LogSink::close);
        let screen_result = self.release_screen();
        debug!("closed dashboard");
        log_result?;
        screen_result
    }

    /// Every step is attempted; the first failure is returned.
    fn release_screen(&mut self) -> Result<()> {
        let cleared = self.terminal.clear();
        let shown = self.terminal.show_cursor();
        let left = if self.alternate_screen {
            self.alternate_screen = false;
            leave_display_mode()
        } else {
            Ok(())
        };
        cleared?;
        shown?;
        left?;
        Ok(())
    }

    /// A taken name is reported before the kind tag or maximum is looked
    /// at. `AttributeRegistry::insert` keeps its own check for callers that
    /// use the registry directly.
    fn ensure_unregistered(&self, name: &str) -> Result<()> {
        if self.registry.contains(name) {
            return Err(DashError::DuplicateAttribute(name.to_string()));
        }
        Ok(())
    }

    fn ensure_open(&self) -> Result<()> {
        if self.open {
            Ok(())
        } else {
            Err(DashError::NotOpen)
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Viewport size as of the last render (or opening).
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&DisplayAttribute> {
        self.registry.get(name)
    }

    /// Attributes in render order.
    pub fn attributes(&self) -> impl Iterator<Item = &DisplayAttribute> {
        self.registry.iter()
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }

    pub fn backend_mut(&mut self) -> &mut B {
        self.terminal.backend_mut()
    }
}

impl<B: Backend> Drop for Dashboard<B> {
    fn drop(&mut self) {
        if self.open {
            self.open = false;
            let _ = self.terminal.show_cursor();
        }
        if self.alternate_screen {
            self.alternate_screen = false;
            let _ = leave_display_mode();
        }
    }
}

fn open_log(config: &DashboardConfig) -> Result<Option<LogSink>> {
    config.log_path.as_ref().map(LogSink::open).transpose()
}
