//! The contract with the rendering engine
//!
//! The engine is a black box reached through two traits:
//!
//! - [`EngineLoader`] - Turns an optional bootstrap source into a live engine
//! - [`QrEngine`] - The live engine: text and style in, pixels out
//!
//! Anything that satisfies them can sit behind the lifecycle, including the
//! fakes the tests use.

use crate::{
    bootstrap::BootstrapSource,
    error::{GenerationError, LoadError},
    style::{CenterImage, LocatorStyle, ModuleStyle, QuietZone},
    types::QrCodeResult,
};
use async_trait::async_trait;
use std::sync::Arc;

/// Brings the engine to life
///
/// Loading may suspend (fetching or compiling the engine binary). The
/// lifecycle guarantees `load` is never running twice at the same time for
/// one lifecycle.
///
/// ```ignore
/// struct MyLoader;
///
/// #[async_trait]
/// impl EngineLoader for MyLoader {
///     fn name(&self) -> &'static str {
///         "my-engine"
///     }
///
///     async fn load(&self, source: Option<BootstrapSource>) -> Result<Arc<dyn QrEngine>, LoadError> {
///         let bytes = match source {
///             Some(source) => source.into_bytes().await?,
///             None => std::fs::read("qrcode_bg.wasm")?,
///         };
///         Ok(Arc::new(MyEngine::instantiate(&bytes)?))
///     }
/// }
/// ```
#[async_trait]
pub trait EngineLoader: Send + Sync {
    /// Used in logs
    fn name(&self) -> &'static str;

    /// Bootstrap the engine; `None` means use the loader's default source
    async fn load(&self, source: Option<BootstrapSource>)
        -> Result<Arc<dyn QrEngine>, LoadError>;
}

/// A loaded engine
pub trait QrEngine: Send + Sync {
    /// Used in logs
    fn name(&self) -> &'static str;

    /// The engine's single generation entry point
    ///
    /// The argument order is the engine's calling convention: text, module
    /// style, locator style, center image, quiet zone.
    fn generate_qr_code_with_options(
        &self,
        text: &str,
        module_style: ModuleStyle,
        locator_style: LocatorStyle,
        center_image: CenterImage,
        quiet_zone: QuietZone,
    ) -> Result<QrCodeResult, GenerationError>;
}
