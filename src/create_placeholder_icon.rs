use anyhow::Result;
use image::DynamicImage;
use ios_icon_gen::constants::paths;
use ios_icon_gen::manifest::Manifest;
use ios_icon_gen::placeholder::{create_placeholder, PlaceholderSpec};
use ios_icon_gen::resize::generate_icons;
use std::path::Path;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let output_dir = Path::new(paths::OUTPUT_DIR);

    let img = create_placeholder(&PlaceholderSpec::default(), output_dir)?;
    generate_icons(&DynamicImage::ImageRgb8(img), &Manifest::ios(), output_dir)?;

    Ok(())
}
