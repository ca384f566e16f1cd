use parley_profile::{Paths, Profile};

/// Create the home layout and a default profile. Returns false when a
/// profile already exists; it is never overwritten.
fn init_at(paths: &Paths) -> anyhow::Result<bool> {
    std::fs::create_dir_all(paths.plugins_dir())?;
    std::fs::create_dir_all(paths.locale_dir())?;

    let profile_file = paths.profile_file();
    if profile_file.exists() {
        return Ok(false);
    }

    Profile::default().save(&profile_file)?;
    tracing::info!(path = %profile_file.display(), "default profile written");
    Ok(true)
}

pub fn run() -> anyhow::Result<()> {
    let paths = Paths::new()?;
    if init_at(&paths)? {
        println!("Created {}", paths.profile_file().display());
    } else {
        println!("Profile already exists: {}", paths.profile_file().display());
    }
    println!("Plugin directory: {}", paths.plugins_dir().display());
    Ok(())
}
