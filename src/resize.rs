use anyhow::{Context, Result};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat};
use std::fs;
use std::path::{Path, PathBuf};

use crate::manifest::Manifest;

/// One icon written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub filename: &'static str,
    pub size: u32,
    pub path: PathBuf,
}

pub fn load_source(path: &Path) -> Result<DynamicImage> {
    println!("Loading source icon: {}", path.display());

    let img = image::open(path)
        .with_context(|| format!("Failed to open source icon: {}", path.display()))?;

    let (width, height) = img.dimensions();
    log::info!("Source icon is {}x{}", width, height);
    if width != height {
        log::debug!("Source icon is not square, outputs will be stretched");
    }

    Ok(img)
}

/// Resample `source` to a `size`x`size` square with the Lanczos3 filter
pub fn resize_icon(source: &DynamicImage, size: u32) -> DynamicImage {
    source.resize_exact(size, size, FilterType::Lanczos3)
}

/// Write one resized PNG per manifest entry into `output_dir`
///
/// Existing files are overwritten. The first failure aborts the run; icons
/// already written are left in place.
pub fn generate_icons(
    source: &DynamicImage,
    manifest: &Manifest,
    output_dir: &Path,
) -> Result<Vec<GeneratedIcon>> {
    fs::create_dir_all(output_dir).with_context(|| {
        format!("Failed to create output directory: {}", output_dir.display())
    })?;
    log::debug!("Writing {} icons to {}", manifest.len(), output_dir.display());

    let mut generated = Vec::with_capacity(manifest.len());

    for spec in manifest {
        let output_path = output_dir.join(spec.filename);
        let resized = resize_icon(source, spec.size);

        resized
            .save_with_format(&output_path, ImageFormat::Png)
            .with_context(|| format!("Failed to write icon: {}", output_path.display()))?;

        println!("Created {} ({}x{})", spec.filename, spec.size, spec.size);

        generated.push(GeneratedIcon {
            filename: spec.filename,
            size: spec.size,
            path: output_path,
        });
    }

    println!("\nAll icons generated successfully!");

    Ok(generated)
}
