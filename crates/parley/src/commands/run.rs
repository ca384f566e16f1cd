use crate::app::App;
use anyhow::Context;
use parley_core::{Brain, Catalog, Conversation, LocalMic, VoiceMic};
use parley_plugins::Category;

pub fn run(local: bool) -> anyhow::Result<()> {
    let app = App::load()?;
    let brain = Brain::from_registry(&app.registry, &app.profile)?;
    if brain.is_empty() {
        tracing::warn!("no speech handlers loaded, every command will be reprompted");
    }

    let catalog = Catalog::load(&app.paths.locale_dir());

    if local {
        tracing::info!("reading commands from the terminal");
        let mic = LocalMic::new(
            app.profile.persona.as_str(),
            std::io::stdin().lock(),
            std::io::stdout(),
        );
        let mut conversation = Conversation::new(mic, brain, &app.profile, Box::new(catalog));
        conversation.greet();
        conversation.handle_until_closed();
        Ok(())
    } else {
        let mic = voice_mic(&app, &brain)?;
        let mut conversation = Conversation::new(mic, brain, &app.profile, Box::new(catalog));
        conversation.greet();
        conversation.handle_forever()
    }
}

/// Resolve the configured engines. A missing engine aborts startup.
fn voice_mic(app: &App, brain: &Brain) -> anyhow::Result<VoiceMic> {
    let profile = &app.profile;

    let active = app
        .registry
        .get_plugin(&profile.stt_engine, Category::SpeechToText)
        .context("active speech-to-text engine unavailable")?
        .build_stt(profile, &brain.all_phrases())?;

    let mut keywords = brain.keyword_phrases();
    keywords.insert(profile.persona.clone());
    let passive = app
        .registry
        .get_plugin(profile.passive_stt_engine(), Category::SpeechToText)
        .context("passive speech-to-text engine unavailable")?
        .build_stt(profile, &keywords)?;

    let tts = app
        .registry
        .get_plugin(&profile.tts_engine, Category::TextToSpeech)
        .context("text-to-speech engine unavailable")?
        .build_tts(profile)?;

    tracing::info!(
        active = %profile.stt_engine,
        passive = %profile.passive_stt_engine(),
        tts = %profile.tts_engine,
        "speech engines ready"
    );

    Ok(VoiceMic::new(&profile.persona, passive, active, tts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use parley_profile::{Paths, Profile};
    use tempfile::TempDir;

    fn app_with(profile: Profile) -> (TempDir, App) {
        let temp = TempDir::new().unwrap();
        let paths = Paths::with_root(temp.path());
        profile.save(&paths.profile_file()).unwrap();
        let app = App::from_paths(paths).unwrap();
        (temp, app)
    }

    #[test]
    fn test_voice_mic_with_configured_engines() {
        let (_temp, app) = app_with(Profile {
            stt_command: vec!["cat".to_string()],
            tts_engine: "console-tts".to_string(),
            ..Profile::default()
        });
        let brain = Brain::from_registry(&app.registry, &app.profile).unwrap();

        assert!(voice_mic(&app, &brain).is_ok());
    }

    #[test]
    fn test_unknown_tts_engine_aborts_startup() {
        let (_temp, app) = app_with(Profile {
            stt_command: vec!["cat".to_string()],
            tts_engine: "festival-tts".to_string(),
            ..Profile::default()
        });
        let brain = Brain::from_registry(&app.registry, &app.profile).unwrap();

        let err = voice_mic(&app, &brain).err().unwrap();
        assert!(err.to_string().contains("text-to-speech engine unavailable"));
    }

    #[test]
    fn test_engine_of_wrong_category_aborts_startup() {
        let (_temp, app) = app_with(Profile {
            stt_engine: "console-tts".to_string(),
            ..Profile::default()
        });
        let brain = Brain::from_registry(&app.registry, &app.profile).unwrap();

        let err = voice_mic(&app, &brain).err().unwrap();
        assert!(err.to_string().contains("active speech-to-text engine unavailable"));
    }

    #[test]
    fn test_unconfigured_recognizer_aborts_startup() {
        let (_temp, app) = app_with(Profile::default());
        let brain = Brain::from_registry(&app.registry, &app.profile).unwrap();

        let err = voice_mic(&app, &brain).err().unwrap();
        assert!(format!("{:#}", err).contains("stt_command is not configured"));
    }
}
