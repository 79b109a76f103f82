//! The generation facade: guard, fill in defaults, hand off to the engine

// this_file: crates/styled-qr-core/src/generator.rs

use crate::{
    bootstrap::BootstrapSource,
    config::LifecycleConfig,
    error::{QrError, Result},
    lifecycle::EngineLifecycle,
    options::GenerateOptions,
    traits::EngineLoader,
    types::QrCodeResult,
};
use std::sync::Arc;

/// The whole public surface in one handle: initialize, check, generate
///
/// `QrGenerator` is cheap to clone; clones share the same lifecycle.
///
/// ```no_run
/// # use std::sync::Arc;
/// # use styled_qr_core::{EngineLoader, QrGenerator};
/// # use styled_qr_core::options::GenerateOptions;
/// # use styled_qr_core::style::ModuleStyle;
/// # async fn demo(loader: Arc<dyn EngineLoader>) -> styled_qr_core::Result<()> {
/// let generator = QrGenerator::from_loader(loader);
/// generator.initialize(None).await?;
///
/// let qr = generator.generate_qr_code(
///     "https://example.com",
///     GenerateOptions::new().module_style(ModuleStyle::Squares),
/// )?;
/// println!("{} bytes, {}px", qr.data.len(), qr.size);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct QrGenerator {
    lifecycle: EngineLifecycle,
}

impl QrGenerator {
    /// Generate through an existing lifecycle
    pub fn new(lifecycle: EngineLifecycle) -> Self {
        Self { lifecycle }
    }

    /// Fresh lifecycle around `loader`, default configuration
    pub fn from_loader(loader: Arc<dyn EngineLoader>) -> Self {
        Self::new(EngineLifecycle::new(loader))
    }

    pub fn from_loader_with_config(loader: Arc<dyn EngineLoader>, config: LifecycleConfig) -> Self {
        Self::new(EngineLifecycle::with_config(loader, config))
    }

    pub fn lifecycle(&self) -> &EngineLifecycle {
        &self.lifecycle
    }

    /// See [`EngineLifecycle::initialize`]
    pub async fn initialize(&self, source: Option<BootstrapSource>) -> Result<()> {
        self.lifecycle.initialize(source).await
    }

    pub fn is_initialized(&self) -> bool {
        self.lifecycle.is_initialized()
    }

    /// Render `text` as a styled QR code
    ///
    /// Fails with [`QrError::EngineNotReady`] without touching the engine if
    /// initialization has not completed; this never waits for an in-flight
    /// load. Axes missing from `options` take the fixed defaults. The text is
    /// not inspected here; engine rejections come back as
    /// [`QrError::Generation`] and the engine's result is returned as-is.
    pub fn generate_qr_code(&self, text: &str, options: GenerateOptions) -> Result<QrCodeResult> {
        let engine = self.lifecycle.engine().ok_or(QrError::EngineNotReady)?;
        let style = options.resolve();

        log::debug!(
            "Generating QR code with '{}': {} bytes, {}/{}/{}/{}",
            engine.name(),
            text.len(),
            style.module_style,
            style.locator_style,
            style.center_image,
            style.quiet_zone
        );

        let result = engine.generate_qr_code_with_options(
            text,
            style.module_style,
            style.locator_style,
            style.center_image,
            style.quiet_zone,
        )?;
        Ok(result)
    }
}

impl From<EngineLifecycle> for QrGenerator {
    fn from(lifecycle: EngineLifecycle) -> Self {
        Self::new(lifecycle)
    }
}
