//! styled-qr core: one engine, loaded once, called with every style axis filled in
//!
//! The QR encoder and painter is an opaque engine. This crate holds
//! everything around it:
//!
//! 1. **Lifecycle** - [`EngineLifecycle`] loads the engine exactly once, no
//!    matter how many callers ask at the same time
//! 2. **Options** - [`options::GenerateOptions`] names the axes a caller cares
//!    about; the rest come from fixed defaults
//! 3. **Generation** - [`QrGenerator`] refuses to run before the engine is
//!    ready, resolves the options and calls the engine with them
//!
//! ## Plugging in an engine
//!
//! Implement the two traits in [`traits`]:
//!
//! - [`EngineLoader`] - Brings the engine to life from a [`BootstrapSource`]
//! - [`QrEngine`] - Turns text and style into pixels
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use styled_qr_core::{
//!     async_trait, BootstrapSource, EngineLoader, LoadError, QrEngine, QrGenerator,
//! };
//! use styled_qr_core::options::GenerateOptions;
//!
//! # use styled_qr_core::style::*;
//! # use styled_qr_core::types::QrCodeResult;
//! # use styled_qr_core::error::GenerationError;
//! # struct MyEngine;
//! # impl QrEngine for MyEngine {
//! #     fn name(&self) -> &'static str { "mine" }
//! #     fn generate_qr_code_with_options(&self, _: &str, _: ModuleStyle, _: LocatorStyle,
//! #         _: CenterImage, _: QuietZone) -> Result<QrCodeResult, GenerationError> { unimplemented!() }
//! # }
//! struct MyLoader;
//!
//! #[async_trait]
//! impl EngineLoader for MyLoader {
//!     fn name(&self) -> &'static str {
//!         "mine"
//!     }
//!
//!     async fn load(&self, _source: Option<BootstrapSource>) -> Result<Arc<dyn QrEngine>, LoadError> {
//!         Ok(Arc::new(MyEngine))
//!     }
//! }
//!
//! # async fn run() -> styled_qr_core::Result<()> {
//! let generator = QrGenerator::from_loader(Arc::new(MyLoader));
//! generator.initialize(None).await?;
//! let qr = generator.generate_qr_code("https://example.com", GenerateOptions::new())?;
//! println!("{}px QR code, {} bytes", qr.size, qr.data.len());
//! # Ok(())
//! # }
//! ```

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod generator;
pub mod lifecycle;
pub mod options;
pub mod style;
pub mod traits;

pub use async_trait::async_trait;
pub use bootstrap::BootstrapSource;
pub use config::{FailurePolicy, LifecycleConfig};
pub use error::{GenerationError, LoadError, QrError, Result, VariantError};
pub use generator::QrGenerator;
pub use lifecycle::EngineLifecycle;
pub use options::{GenerateOptions, StyleOptions};
pub use traits::{EngineLoader, QrEngine};

/// The data that crosses the engine boundary
pub mod types {
    /// What the engine hands back
    ///
    /// The pixel buffer and both sizes are exactly what the engine produced;
    /// nothing in this crate reads or rewrites them.
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct QrCodeResult {
        /// Pixel data, in the engine's layout
        pub data: Vec<u8>,
        /// Rendered size in pixels
        pub size: u32,
        /// Size before the engine scaled the symbol up
        pub original_size: u32,
    }
}

pub use types::QrCodeResult;
