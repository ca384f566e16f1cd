pub fn run() -> anyhow::Result<()> {
    println!("parley {}", env!("CARGO_PKG_VERSION"));
    println!("Voice-driven command dispatcher with pluggable handlers");
    Ok(())
}
