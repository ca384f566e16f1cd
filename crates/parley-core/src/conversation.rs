//! The listen -> route -> dispatch -> respond loop

use crate::i18n::Translator;
use crate::router::Brain;
use crate::types::DispatchOutcome;
use parley_plugins::{Listener, Speaker, SpeechHandler};
use parley_profile::Profile;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

pub const GREETING: &str = "How can I be of service?";
pub const GREETING_NAMED: &str = "How can I be of service, {name}?";
pub const REPROMPT: &str = "Pardon?";
pub const APOLOGY: &str =
    "I'm sorry. I had some trouble with that operation. Please try again later.";

/// One running conversation.
///
/// Turns are strictly sequential: one utterance is read, routed and handled
/// before the next one is requested, and at most one handler runs at a time.
pub struct Conversation<'p, M> {
    persona: String,
    mic: M,
    brain: Brain,
    profile: &'p Profile,
    translator: Box<dyn Translator>,
}

impl<'p, M: Listener + Speaker> Conversation<'p, M> {
    pub fn new(mic: M, brain: Brain, profile: &'p Profile, translator: Box<dyn Translator>) -> Self {
        Self {
            persona: profile.persona.clone(),
            mic,
            brain,
            profile,
            translator,
        }
    }

    pub fn greet(&mut self) {
        let salutation = match &self.profile.first_name {
            Some(name) => self.translate(GREETING_NAMED).replace("{name}", name),
            None => self.translate(GREETING),
        };
        self.mic.say(&salutation);
    }

    /// Run one iteration of the loop. Every turn speaks exactly one response
    /// unless the handler speaks for itself or the input has closed.
    pub fn turn(&mut self) -> DispatchOutcome {
        let utterance = self.mic.listen();

        if utterance.trim().is_empty() {
            if self.mic.is_closed() {
                return DispatchOutcome::Closed;
            }
            self.reprompt();
            return DispatchOutcome::NoInput;
        }

        let Some((plugin, text)) = self.brain.query(&utterance) else {
            tracing::debug!(text = %utterance, "no plugin matched");
            self.reprompt();
            return DispatchOutcome::Unmatched { text: utterance };
        };

        let name = plugin.name().to_string();
        let text = text.to_string();

        let mut responder = Responder {
            mic: &mut self.mic,
            translator: self.translator.as_ref(),
            profile: self.profile,
        };

        match dispatch(plugin, &text, &mut responder) {
            Ok(()) => {
                tracing::debug!(plugin = %name, text = %text, "handling of phrase completed");
                DispatchOutcome::Matched { plugin: name, text }
            }
            Err(error) => {
                tracing::error!(plugin = %name, text = %text, error = ?error, "failed to execute plugin");
                let apology = self.translate(APOLOGY);
                self.mic.say(&apology);
                DispatchOutcome::HandlerFailed {
                    plugin: name,
                    error,
                }
            }
        }
    }

    /// Loop forever. The only way out is terminating the process, so the mic
    /// must be one that never closes.
    pub fn handle_forever(&mut self) -> ! {
        self.log_start();
        loop {
            self.turn();
        }
    }

    /// Loop until the mic reports its input closed
    pub fn handle_until_closed(&mut self) {
        self.log_start();
        while !matches!(self.turn(), DispatchOutcome::Closed) {}
        tracing::info!("input closed, ending session");
    }

    fn log_start(&self) {
        tracing::info!(
            persona = %self.persona,
            plugins = self.brain.len(),
            "starting to handle conversation"
        );
    }

    pub fn mic(&self) -> &M {
        &self.mic
    }

    pub fn brain(&self) -> &Brain {
        &self.brain
    }

    fn reprompt(&mut self) {
        let phrase = self.translate(REPROMPT);
        self.mic.say(&phrase);
    }

    fn translate(&self, template: &str) -> String {
        self.translator.translate(template, self.profile)
    }
}

/// Speaker handed to handlers: output goes to the mic, templates through the translator
struct Responder<'a, M> {
    mic: &'a mut M,
    translator: &'a dyn Translator,
    profile: &'a Profile,
}

impl<M: Speaker> Speaker for Responder<'_, M> {
    fn say(&mut self, phrase: &str) {
        self.mic.say(phrase);
    }

    fn translate(&self, template: &str) -> String {
        self.translator.translate(template, self.profile)
    }
}

/// Error boundary around one handler call: returned errors and panics both
/// come back as `Err` and control always returns to the caller.
fn dispatch(plugin: &dyn SpeechHandler, text: &str, speaker: &mut dyn Speaker) -> anyhow::Result<()> {
    match panic::catch_unwind(AssertUnwindSafe(|| plugin.handle(text, speaker))) {
        Ok(result) => result,
        Err(payload) => Err(anyhow::anyhow!(
            "plugin panicked: {}",
            panic_message(payload.as_ref())
        )),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown panic payload"
    }
}
