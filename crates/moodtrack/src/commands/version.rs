pub fn run() -> anyhow::Result<()> {
    println!("moodtrack {}", env!("CARGO_PKG_VERSION"));
    println!("Keyword and sentiment mood tracking with wellness recommendations");
    Ok(())
}
