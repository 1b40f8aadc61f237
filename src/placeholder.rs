use ab_glyph::{point, Font, FontVec, OutlinedGlyph, PxScale, ScaleFont};
use anyhow::{anyhow, Context, Result};
use image::{ImageFormat, Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use std::fs;
use std::path::{Path, PathBuf};

use crate::builtin_font;
use crate::constants::{font, paths, placeholder};

/// Appearance of the generated stand-in source icon
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceholderSpec {
    pub size: u32,
    pub background: Rgb<u8>,
    pub foreground: Rgb<u8>,
    pub label: String,
    pub font_path: PathBuf,
    pub font_size: f32,
}

impl Default for PlaceholderSpec {
    fn default() -> Self {
        PlaceholderSpec {
            size: placeholder::SIZE,
            background: Rgb(placeholder::BACKGROUND),
            foreground: Rgb(placeholder::FOREGROUND),
            label: placeholder::LABEL.to_string(),
            font_path: PathBuf::from(font::SYSTEM_FONT_PATH),
            font_size: font::SIZE_PX,
        }
    }
}

/// Ink bounding box of laid-out text, relative to the pen origin
///
/// `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBounds {
    pub fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    fn union(self, other: TextBounds) -> TextBounds {
        TextBounds {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

pub enum Typeface {
    /// A TrueType font rendered at a fixed pixel height
    Outline { font: FontVec, scale: PxScale },
    /// The built-in bitmap font, `cell` pixels per bitmap dot
    Builtin { cell: u32 },
}

impl Typeface {
    /// Load the font at `path`, falling back to the built-in font on any failure
    pub fn load(path: &Path, size_px: f32) -> Typeface {
        match Self::load_outline(path, size_px) {
            Ok(typeface) => {
                log::debug!("Using font {} at {}px", path.display(), size_px);
                typeface
            }
            Err(e) => {
                log::warn!("{:#}; falling back to the built-in font", e);
                Self::builtin(size_px)
            }
        }
    }

    pub fn load_outline(path: &Path, size_px: f32) -> Result<Typeface> {
        let data = fs::read(path)
            .with_context(|| format!("Failed to read font: {}", path.display()))?;

        // Collections (.ttc) load their first face
        let font = FontVec::try_from_vec_and_index(data, 0)
            .map_err(|e| anyhow!("Failed to parse font {}: {}", path.display(), e))?;

        Ok(Typeface::Outline {
            font,
            scale: PxScale::from(size_px),
        })
    }

    pub fn builtin(size_px: f32) -> Typeface {
        let cell = (size_px / font::BUILTIN_CELL_DIVISOR).round();
        // NaN falls through both comparisons and lands on 1
        let cell = if cell >= font::BUILTIN_MAX_CELL as f32 {
            font::BUILTIN_MAX_CELL
        } else if cell >= 1.0 {
            cell as u32
        } else {
            1
        };
        Typeface::Builtin { cell }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Typeface::Builtin { .. })
    }

    /// Ink bounds of `text` with the pen at (0, 0) and the first line's top at y = 0
    ///
    /// Text without any ink yields an empty box at the origin.
    pub fn text_bounds(&self, text: &str) -> TextBounds {
        match self {
            Typeface::Outline { font, scale } => outline_glyphs(font, *scale, text)
                .iter()
                .map(|glyph| {
                    let rect = glyph.px_bounds();
                    TextBounds {
                        left: rect.min.x.floor() as i32,
                        top: rect.min.y.floor() as i32,
                        right: rect.max.x.ceil() as i32,
                        bottom: rect.max.y.ceil() as i32,
                    }
                })
                .reduce(TextBounds::union)
                .unwrap_or_default(),
            Typeface::Builtin { cell } => {
                let cell = *cell as i32;
                builtin_font::cells(text)
                    .map(|(col, row)| {
                        let x = (col as i32).saturating_mul(cell);
                        let y = (row as i32).saturating_mul(cell);
                        TextBounds {
                            left: x,
                            top: y,
                            right: x.saturating_add(cell),
                            bottom: y.saturating_add(cell),
                        }
                    })
                    .reduce(TextBounds::union)
                    .unwrap_or_default()
            }
        }
    }

    /// Draw `text` with the pen at `origin`; pixels outside the canvas are clipped
    pub fn draw(&self, img: &mut RgbImage, text: &str, origin: (i32, i32), color: Rgb<u8>) {
        match self {
            Typeface::Outline { font, scale } => {
                let (width, height) = (img.width() as i32, img.height() as i32);
                for glyph in outline_glyphs(font, *scale, text) {
                    let rect = glyph.px_bounds();
                    let left = origin.0.saturating_add(rect.min.x as i32);
                    let top = origin.1.saturating_add(rect.min.y as i32);
                    glyph.draw(|gx, gy, coverage| {
                        let x = left.saturating_add(gx as i32);
                        let y = top.saturating_add(gy as i32);
                        if x < 0 || y < 0 || x >= width || y >= height {
                            return;
                        }
                        let pixel = img.get_pixel_mut(x as u32, y as u32);
                        *pixel = blend(*pixel, color, coverage);
                    });
                }
            }
            Typeface::Builtin { cell } => {
                for (col, row) in builtin_font::cells(text) {
                    let x = origin.0.saturating_add((col as i32).saturating_mul(*cell as i32));
                    let y = origin.1.saturating_add((row as i32).saturating_mul(*cell as i32));
                    draw_filled_rect_mut(img, Rect::at(x, y).of_size(*cell, *cell), color);
                }
            }
        }
    }
}

/// Lay out `text` on a single line with kerning, baseline at the font's ascent
fn outline_glyphs(font: &FontVec, scale: PxScale, text: &str) -> Vec<OutlinedGlyph> {
    let scaled = font.as_scaled(scale);
    let mut caret = 0.0;
    let mut previous = None;
    let mut glyphs = Vec::new();

    for c in text.chars() {
        let id = scaled.glyph_id(c);
        if let Some(previous) = previous {
            caret += scaled.kern(previous, id);
        }
        let glyph = id.with_scale_and_position(scale, point(caret, scaled.ascent()));
        caret += scaled.h_advance(id);
        previous = Some(id);

        if let Some(outlined) = font.outline_glyph(glyph) {
            glyphs.push(outlined);
        }
    }

    glyphs
}

fn blend(background: Rgb<u8>, foreground: Rgb<u8>, coverage: f32) -> Rgb<u8> {
    let alpha = coverage.clamp(0.0, 1.0);
    let mut out = background;
    for (channel, fg) in out.0.iter_mut().zip(foreground.0) {
        let mixed = *channel as f32 * (1.0 - alpha) + fg as f32 * alpha;
        *channel = mixed.round() as u8;
    }
    out
}

/// Pen position that centers the ink box of `bounds` on a `size`x`size` canvas
pub fn centered_origin(size: u32, bounds: &TextBounds) -> (i32, i32) {
    let size = size as i32;
    let x = size.saturating_sub(bounds.width()).div_euclid(2).saturating_sub(bounds.left);
    let y = size.saturating_sub(bounds.height()).div_euclid(2).saturating_sub(bounds.top);
    (x, y)
}

/// Render the placeholder with an already-loaded typeface
pub fn render_with_typeface(spec: &PlaceholderSpec, typeface: &Typeface) -> RgbImage {
    let mut img = RgbImage::from_pixel(spec.size, spec.size, spec.background);

    let bounds = typeface.text_bounds(&spec.label);
    let origin = centered_origin(spec.size, &bounds);
    log::debug!("Label {:?} bounds {:?}, drawn at {:?}", spec.label, bounds, origin);

    typeface.draw(&mut img, &spec.label, origin, spec.foreground);
    img
}

pub fn render_placeholder(spec: &PlaceholderSpec) -> RgbImage {
    let typeface = Typeface::load(&spec.font_path, spec.font_size);
    render_with_typeface(spec, &typeface)
}

/// Render the placeholder and save it as the full-size source icon in `output_dir`
pub fn create_placeholder(spec: &PlaceholderSpec, output_dir: &Path) -> Result<RgbImage> {
    fs::create_dir_all(output_dir).with_context(|| {
        format!("Failed to create output directory: {}", output_dir.display())
    })?;

    let img = render_placeholder(spec);

    let source_path = output_dir.join(paths::SOURCE_FILENAME);
    img.save_with_format(&source_path, ImageFormat::Png)
        .with_context(|| format!("Failed to write source icon: {}", source_path.display()))?;
    println!("Created source icon: {}", source_path.display());

    Ok(img)
}
