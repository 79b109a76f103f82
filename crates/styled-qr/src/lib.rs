//! styled-qr - Chromium-style QR codes from an opaque rendering engine
//!
//! The engine (normally a precompiled binary module) does the QR encoding
//! and painting. This crate makes it safe to share:
//!
//! 1. **Initialize** - load the engine once, however many callers race for it
//! 2. **Check** - ask whether it is ready without waiting
//! 3. **Generate** - call it with every style axis filled in
//!
//! # Example
//!
//! ```ignore
//! use styled_qr::prelude::*;
//!
//! let generator = styled_qr::generator(Arc::new(MyWasmLoader::default()));
//! generator.initialize(None).await?;
//!
//! let qr = generator.generate_qr_code(
//!     "https://example.com",
//!     GenerateOptions::new()
//!         .module_style(ModuleStyle::Circles)
//!         .locator_style(LocatorStyle::Rounded),
//! )?;
//! println!("{} bytes at {}px", qr.data.len(), qr.size);
//! ```
//!
//! # Defaults
//!
//! | Axis            | Default                             |
//! |-----------------|-------------------------------------|
//! | `module_style`  | [`ModuleStyle::Circles`]            |
//! | `locator_style` | [`LocatorStyle::Rounded`]           |
//! | `center_image`  | [`CenterImage::Dino`]               |
//! | `quiet_zone`    | [`QuietZone::WillBeAddedByClient`]  |
//!
//! # Feature Flags
//!
//! - `serde`: (de)serialize options, styles and results; option keys use
//!   the JavaScript camelCase names (`moduleStyle`, `quietZone`, ...)

use std::sync::Arc;

pub use styled_qr_core::{
    bootstrap, config, error, lifecycle, options, traits, types, BootstrapSource, EngineLifecycle,
    EngineLoader, FailurePolicy, GenerateOptions, LifecycleConfig, QrCodeResult, QrEngine,
    QrError, QrGenerator, Result, StyleOptions,
};

// The engine's enumerations, re-exported as the engine defines them
pub use styled_qr_core::style::{self, CenterImage, LocatorStyle, ModuleStyle, QuietZone};

/// Build a generator whose lifecycle is configured from the environment
///
/// Reads `STYLED_QR_FAILURE_POLICY` (see [`LifecycleConfig::from_env`]).
/// Use [`QrGenerator::from_loader_with_config`] to set the policy in code.
pub fn generator(loader: Arc<dyn EngineLoader>) -> QrGenerator {
    let config = LifecycleConfig::from_env();
    log::debug!(
        "Creating QR generator for loader '{}' ({:?})",
        loader.name(),
        config
    );
    QrGenerator::from_loader_with_config(loader, config)
}

/// Common imports for typical usage
pub mod prelude {
    pub use std::sync::Arc;
    pub use styled_qr_core::{
        async_trait,
        error::{GenerationError, LoadError, QrError, Result},
        style::{CenterImage, LocatorStyle, ModuleStyle, QuietZone},
        traits::{EngineLoader, QrEngine},
        BootstrapSource, GenerateOptions, QrCodeResult, QrGenerator,
    };
}
