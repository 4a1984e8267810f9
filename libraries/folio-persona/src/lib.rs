//! Folio Persona
//!
//! HTTP client for the generation service behind the hero bio
//! personalizer. A visitor types their role; the service answers with a
//! rewritten hero headline and description in the current language. The
//! result overlays the hero text for that visitor only and is never
//! persisted.

#![forbid(unsafe_code)]

mod client;
mod error;

pub use client::{PersonaClient, PersonaConfig};
pub use error::{PersonaError, Result};
