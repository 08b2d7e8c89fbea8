use std::path::Path;

use anyhow::Context as _;
use resvg::tiny_skia::{Color, Pixmap, Transform};

use crate::export::options::WriterOptions;

/// SVG user units per inch.
const SVG_UNITS_PER_INCH: f32 = 96.0;

/// Largest raster edge accepted, in pixels.
const MAX_DIM: u32 = 16_384;

/// Raster settings read from writer options.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RasterSettings {
    /// Output resolution; a figure is `width_in * dpi` pixels wide.
    pub dpi: f32,
    /// Keep the background transparent instead of filling it white.
    pub transparent: bool,
    /// Crop to the drawing bounds instead of the full canvas.
    pub tight: bool,
    /// Padding around a tight crop, in inches.
    pub pad_inches: f32,
}

impl Default for RasterSettings {
    fn default() -> Self {
        Self {
            dpi: SVG_UNITS_PER_INCH,
            transparent: false,
            tight: false,
            pad_inches: 0.1,
        }
    }
}

impl RasterSettings {
    /// Read `dpi`, `transparent`, `bbox_inches`, and `pad_inches`; other keys are ignored.
    pub fn from_options(opts: &WriterOptions) -> anyhow::Result<Self> {
        let mut s = Self::default();

        if let Some(v) = opts.get("dpi") {
            let dpi = v
                .as_f64()
                .with_context(|| format!("writer option `dpi` must be a number, got {v}"))?
                as f32;
            if !dpi.is_finite() || dpi <= 0.0 {
                anyhow::bail!("writer option `dpi` must be finite and > 0, got {dpi}");
            }
            s.dpi = dpi;
        }
        if let Some(v) = opts.get("transparent") {
            s.transparent = v
                .as_bool()
                .with_context(|| format!("writer option `transparent` must be a bool, got {v}"))?;
        }
        match opts.get("bbox_inches") {
            None | Some(serde_json::Value::Null) => {}
            Some(serde_json::Value::String(mode)) => s.tight = mode == "tight",
            Some(v) => anyhow::bail!("writer option `bbox_inches` must be a string, got {v}"),
        }
        if let Some(v) = opts.get("pad_inches") {
            let pad = v
                .as_f64()
                .with_context(|| format!("writer option `pad_inches` must be a number, got {v}"))?
                as f32;
            if !pad.is_finite() || pad < 0.0 {
                anyhow::bail!("writer option `pad_inches` must be finite and >= 0, got {pad}");
            }
            s.pad_inches = pad;
        }
        Ok(s)
    }
}

/// Map a format name to a writable raster format.
pub fn raster_format(name: &str) -> Option<image::ImageFormat> {
    image::ImageFormat::from_extension(name.to_ascii_lowercase()).filter(|f| f.writing_enabled())
}

/// Draw `tree` into a new pixmap according to `settings`.
pub fn render_pixmap(tree: &usvg::Tree, settings: &RasterSettings) -> anyhow::Result<Pixmap> {
    let scale = settings.dpi / SVG_UNITS_PER_INCH;
    let size = tree.size();

    // Stroke bounds, so that ink outside the geometry survives the crop.
    let bounds = tree.root().abs_stroke_bounding_box();
    let (left, top, width, height, pad_px) =
        if settings.tight && bounds.width() > 0.0 && bounds.height() > 0.0 {
            (
                bounds.left(),
                bounds.top(),
                bounds.width(),
                bounds.height(),
                settings.pad_inches * settings.dpi,
            )
        } else {
            (0.0, 0.0, size.width(), size.height(), 0.0)
        };

    let w = (width * scale + 2.0 * pad_px).ceil().max(1.0) as u32;
    let h = (height * scale + 2.0 * pad_px).ceil().max(1.0) as u32;
    if w > MAX_DIM || h > MAX_DIM {
        anyhow::bail!("raster size too large: {w}x{h} (max {MAX_DIM}x{MAX_DIM})");
    }

    let mut pixmap =
        Pixmap::new(w, h).with_context(|| format!("failed to allocate {w}x{h} pixmap"))?;
    if !settings.transparent {
        pixmap.fill(Color::WHITE);
    }

    let xform = Transform::from_row(
        scale,
        0.0,
        0.0,
        scale,
        pad_px - left * scale,
        pad_px - top * scale,
    );
    resvg::render(tree, xform, &mut pixmap.as_mut());
    Ok(pixmap)
}

/// Straight-alpha RGBA8 bytes of a premultiplied pixmap.
pub fn demultiplied_rgba8(pixmap: &Pixmap) -> Vec<u8> {
    let mut out = Vec::with_capacity(pixmap.pixels().len() * 4);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        out.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    out
}

/// Encode `pixmap` to `path` in `format`.
///
/// Formats without an alpha channel are composited over white first.
pub fn encode_pixmap(
    pixmap: &Pixmap,
    path: &Path,
    format: image::ImageFormat,
) -> anyhow::Result<()> {
    let (w, h) = (pixmap.width(), pixmap.height());
    let rgba = image::RgbaImage::from_raw(w, h, demultiplied_rgba8(pixmap))
        .context("pixmap size does not match its pixel buffer")?;

    let img = if supports_alpha(format) {
        image::DynamicImage::ImageRgba8(rgba)
    } else {
        image::DynamicImage::ImageRgb8(flatten_onto_white(&rgba))
    };

    img.save_with_format(path, format)
        .with_context(|| format!("write {format:?} '{}'", path.display()))
}

fn supports_alpha(format: image::ImageFormat) -> bool {
    !matches!(format, image::ImageFormat::Jpeg | image::ImageFormat::Pnm)
}

fn flatten_onto_white(rgba: &image::RgbaImage) -> image::RgbImage {
    image::RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        let a = a as u16;
        let over = |c: u8| ((c as u16 * a + 255 * (255 - a) + 127) / 255) as u8;
        image::Rgb([over(r), over(g), over(b)])
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
