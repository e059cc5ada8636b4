//! Chrome DevTools Protocol backend (uses the `headless_chrome` crate)

use crate::{Error, RenderConfig, RenderDocument, Renderer, Result, Viewport};
use base64::Engine as Base64Engine;
use headless_chrome::browser::tab::Tab;
use headless_chrome::protocol::cdp::Page;
use headless_chrome::{Browser, LaunchOptions};
use log::{debug, warn};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// CDP-based rendering backend
///
/// This adapter launches a headless Chrome instance whose window is sized to
/// the configured viewport, loads the composed document by navigating to a
/// base64 `data:` URL, and captures a screenshot clipped to the document
/// bounds with backgrounds composited.
///
/// The launch is deferred until the first document load so the window can be
/// created at the viewport dimensions directly; headless Chrome's viewport is
/// its window size. Dropping the instance kills the Chrome child process, so
/// no browser is leaked on error paths.
pub struct CdpRenderer {
    config: RenderConfig,
    viewport: Viewport,
    browser: Option<Browser>,
    tab: Option<Arc<Tab>>,
}

impl CdpRenderer {
    fn launch(&mut self) -> Result<()> {
        let launch_options = LaunchOptions::default_builder()
            .headless(true)
            .window_size(Some((self.viewport.width, self.viewport.height)))
            .build()
            .map_err(|e| {
                Error::InitializationError(format!("Failed to build launch options: {}", e))
            })?;

        let browser = Browser::new(launch_options)
            .map_err(|e| Error::InitializationError(format!("Failed to launch browser: {}", e)))?;

        let tab = browser
            .new_tab()
            .map_err(|e| Error::InitializationError(format!("Failed to create tab: {}", e)))?;

        debug!(
            "launched headless browser at {}x{}",
            self.viewport.width, self.viewport.height
        );

        self.browser = Some(browser);
        self.tab = Some(tab);
        Ok(())
    }

    fn tab(&self) -> Result<&Arc<Tab>> {
        self.tab
            .as_ref()
            .ok_or_else(|| Error::RenderError("No document loaded".into()))
    }

    /// Wait until the page reports `document.readyState === "complete"`, then
    /// give in-flight subresources (fonts, images referenced by the SVG) a
    /// settle window before capture. This stands in for a network-idle signal,
    /// which the CDP crate does not surface.
    fn wait_until_settled(&self) -> Result<()> {
        let tab = self.tab()?;
        let deadline = Instant::now() + Duration::from_millis(self.config.timeout_ms);

        loop {
            let state = tab
                .evaluate("document.readyState", false)
                .map_err(|e| Error::LoadError(format!("Readiness check failed: {}", e)))?;

            let complete = matches!(
                state.value,
                Some(serde_json::Value::String(ref s)) if s == "complete"
            );
            if complete {
                break;
            }

            if Instant::now() >= deadline {
                return Err(Error::Timeout(self.config.timeout_ms));
            }
            thread::sleep(Duration::from_millis(50));
        }

        thread::sleep(Duration::from_millis(self.config.settle_ms));
        Ok(())
    }

    fn eval_dimension(&self, expr: &str) -> Result<f64> {
        let result = self
            .tab()?
            .evaluate(expr, false)
            .map_err(|e| Error::RenderError(format!("Evaluation failed: {}", e)))?;

        match result.value {
            Some(v) => v
                .as_f64()
                .ok_or_else(|| Error::RenderError(format!("Non-numeric result from {}", expr))),
            None => Err(Error::RenderError(
                "No value returned from evaluation".into(),
            )),
        }
    }
}

impl Renderer for CdpRenderer {
    fn new(config: RenderConfig) -> Result<Self>
    where
        Self: Sized,
    {
        Ok(Self {
            viewport: config.viewport,
            config,
            browser: None,
            tab: None,
        })
    }

    fn set_viewport(&mut self, viewport: Viewport) -> Result<()> {
        if viewport.width == 0 || viewport.height == 0 {
            return Err(Error::RenderError(format!(
                "viewport must be non-empty, got {}x{}",
                viewport.width, viewport.height
            )));
        }
        self.viewport = viewport;
        Ok(())
    }

    fn load_document(&mut self, document: &RenderDocument) -> Result<()> {
        if self.browser.is_none() {
            self.launch()?;
        }

        // Navigating to a data URL loads the composed markup without a server
        let url = format!(
            "data:text/html;base64,{}",
            Base64Engine::encode(&base64::engine::general_purpose::STANDARD, document.html())
        );

        let tab = self.tab()?;
        tab.navigate_to(&url)
            .map_err(|e| Error::LoadError(format!("Navigation failed: {}", e)))?;
        tab.wait_until_navigated()
            .map_err(|e| Error::LoadError(format!("Wait for navigation failed: {}", e)))?;

        self.wait_until_settled()
    }

    fn capture_png(&self) -> Result<Vec<u8>> {
        // Full-page semantics: clip to the document's scroll bounds, which
        // equal the viewport unless the drawing overflows it.
        let scroll_width = self.eval_dimension("document.documentElement.scrollWidth")?;
        let scroll_height = self.eval_dimension("document.documentElement.scrollHeight")?;

        let width = scroll_width.max(self.viewport.width as f64);
        let height = scroll_height.max(self.viewport.height as f64);
        if width > self.viewport.width as f64 || height > self.viewport.height as f64 {
            warn!(
                "document extends beyond the viewport: {}x{} > {}x{}",
                scroll_width, scroll_height, self.viewport.width, self.viewport.height
            );
        }

        let clip = Page::Viewport {
            x: 0.0,
            y: 0.0,
            width,
            height,
            scale: 1.0,
        };

        let screenshot_data = self
            .tab()?
            .capture_screenshot(
                Page::CaptureScreenshotFormatOption::Png,
                None,
                Some(clip),
                true,
            )
            .map_err(|e| Error::RenderError(format!("Screenshot failed: {}", e)))?;

        Ok(screenshot_data)
    }

    fn close(mut self) -> Result<()> {
        self.tab.take();
        // Dropping the Browser handle shuts down the Chrome child process
        self.browser.take();
        debug!("closed headless browser");
        Ok(())
    }
}
