use crate::render;

pub fn run() -> anyhow::Result<()> {
    println!("Wellness Library");
    println!("================");
    println!("{}", render::library(moodtrack_catalog::wellness_library()));
    Ok(())
}
