//! Code generation from generated units.
//!
//! The core produces language-neutral [`GeneratedUnit`](autolog_core::GeneratedUnit)s;
//! this module renders them as source for JVM robot projects.
//!
//! # Architecture
//!
//! ```text
//! Rust Source / JSON batch
//!     ↓
//!  [autolog_core::parse / DescriptorEntry]
//!     ↓
//!  ClassDescriptor
//!     ↓
//!  [autolog_core::generate]
//!     ↓
//!  GeneratedUnit ─→ [Kotlin Generator] → <Name>AutoLogged.kt
//! ```
//!
//! # Usage
//!
//! ```bash
//! autolog generate -i src/inputs.rs -o build/generated -p frc.robot
//! ```
//!
//! # See Also
//!
//! - [`kotlin`] module for Kotlin class generation
//! - [`jvm_types`] module for codec tag to JVM type mapping

pub mod jvm_types;
pub mod kotlin;
