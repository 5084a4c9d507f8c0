//! Core business logic - platform-agnostic
//!
//! - Pure state machine (no terminal I/O)
//! - Event-driven updates
//! - Effects for everything the shell has to do

pub mod action;
pub mod app;
pub mod assemble;
pub mod codec;
pub mod effect;
pub mod error;
pub mod event;
pub mod form;
pub mod forwarding;
pub mod types;
pub mod validate;
pub mod view;

pub use app::WizardCore;
pub use assemble::{assemble, AssembledPayload};
pub use effect::Effect;
pub use error::{AssemblyError, DecodeError, Unsupported, ValidationError, WizardError};
pub use event::Event;
pub use types::*;
pub use view::ViewModel;
