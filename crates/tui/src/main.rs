mod renderer;

use std::path::PathBuf;

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let scene = match args.get(1) {
        Some(arg) => {
            let path = PathBuf::from(arg);
            let data = std::fs::read(&path)?;
            scrollfx_core::scene_loader::load_scene(&data)?
        }
        None => scrollfx_core::demo::landing_scene(),
    };

    renderer::render_tui(scene)?;
    Ok(())
}
