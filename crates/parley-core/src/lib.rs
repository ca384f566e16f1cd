//! Command routing and the conversation loop

mod conversation;
mod error;
mod i18n;
mod mic;
mod router;
mod types;

pub use conversation::{Conversation, APOLOGY, GREETING, GREETING_NAMED, REPROMPT};
pub use error::BrainError;
pub use i18n::{Catalog, Identity, Translator};
pub use mic::{LocalMic, VoiceMic};
pub use router::Brain;
pub use types::DispatchOutcome;
