//! Navigation targets for built search URLs
//!
//! A `Navigator` is the last step of a search: it receives the finished
//! URL and hands it off. Nothing is read back.

use anyhow::{Context, Result};
use std::io::Write;
use tracing::info;

/// Receives a finished search URL
pub trait Navigator {
    /// Open or emit `url`. Fire and forget.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL could not be handed off.
    fn navigate(&mut self, url: &str) -> Result<()>;
}

impl<N: Navigator + ?Sized> Navigator for Box<N> {
    fn navigate(&mut self, url: &str) -> Result<()> {
        (**self).navigate(url)
    }
}

/// Opens URLs in the user's default browser.
///
/// The browser is launched as a detached process, so the results page
/// lives in a fresh context with no opener and no referrer.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl Navigator for SystemBrowser {
    fn navigate(&mut self, url: &str) -> Result<()> {
        info!("Opening search in default browser");
        open::that_detached(url).with_context(|| format!("Failed to open browser for {url}"))
    }
}

/// Writes each URL on its own line, e.g. to stdout for piping.
#[derive(Debug)]
pub struct PrintNavigator<W: Write> {
    writer: W,
}

impl<W: Write> PrintNavigator<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl PrintNavigator<std::io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Navigator for PrintNavigator<W> {
    fn navigate(&mut self, url: &str) -> Result<()> {
        writeln!(self.writer, "{url}").context("Failed to write search URL")?;
        self.writer.flush().context("Failed to flush search URL")
    }
}

/// Keeps every URL in memory, in navigation order.
#[derive(Debug, Default, Clone)]
pub struct RecordingNavigator {
    urls: Vec<String>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn urls(&self) -> &[String] {
        &self.urls
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, url: &str) -> Result<()> {
        self.urls.push(url.to_string());
        Ok(())
    }
}
