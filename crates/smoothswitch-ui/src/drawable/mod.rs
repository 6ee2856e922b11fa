//! Track and thumb assets.
//!
//! A [`Drawable`] is anything with an intrinsic pixel size that the painter
//! can place into bounds: a solid fill, a decoded raster image, or a parsed
//! SVG. Drawables are cheap to clone; decoded pixel data is shared.

mod error;
mod resources;

use std::fmt;
use std::path::Path;
use std::rc::Rc;

use resvg::usvg;

pub use error::AssetError;
pub use resources::{ResourceId, Resources};

/// Widget state a drawable renders for (pressed thumb, checked track, …).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawableState {
    pub enabled: bool,
    pub pressed: bool,
    pub checked: bool,
}

impl Default for DrawableState {
    fn default() -> Self {
        Self { enabled: true, pressed: false, checked: false }
    }
}

/// Pixel source behind a [`Drawable`].
#[derive(Clone)]
pub enum DrawableSource {
    /// Straight-alpha sRGB fill.
    Solid([u8; 4]),
    Bitmap(Rc<image::RgbaImage>),
    Svg(Rc<usvg::Tree>),
}

impl fmt::Debug for DrawableSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawableSource::Solid(rgba) => f.debug_tuple("Solid").field(rgba).finish(),
            DrawableSource::Bitmap(img) => write!(f, "Bitmap({}x{})", img.width(), img.height()),
            DrawableSource::Svg(tree) => {
                write!(f, "Svg({}x{})", tree.size().width(), tree.size().height())
            }
        }
    }
}

/// A visual asset with an intrinsic size in whole logical pixels.
#[derive(Debug, Clone)]
pub struct Drawable {
    label: Rc<str>,
    source: DrawableSource,
    width: i32,
    height: i32,
}

impl Drawable {
    /// Solid fill with an explicit intrinsic size.
    pub fn solid(label: &str, width: i32, height: i32, rgba: [u8; 4]) -> Result<Self, AssetError> {
        Self::sized(label, DrawableSource::Solid(rgba), width, height)
    }

    /// Decodes raster bytes (PNG, JPEG, …); the intrinsic size is the pixel size.
    pub fn from_image_bytes(label: &str, bytes: &[u8]) -> Result<Self, AssetError> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| AssetError::Decode { label: label.to_string(), reason: e.to_string() })?
            .to_rgba8();
        let (w, h) = img.dimensions();
        Self::sized(label, DrawableSource::Bitmap(Rc::new(img)), to_px(w as f32), to_px(h as f32))
    }

    /// Parses SVG data; the intrinsic size is the document size rounded up.
    pub fn from_svg_data(label: &str, data: &[u8]) -> Result<Self, AssetError> {
        let tree = usvg::Tree::from_data(data, &usvg::Options::default())
            .map_err(|e| AssetError::Decode { label: label.to_string(), reason: e.to_string() })?;
        let size = tree.size();
        let (w, h) = (to_px(size.width()), to_px(size.height()));
        Self::sized(label, DrawableSource::Svg(Rc::new(tree)), w, h)
    }

    /// Loads an asset file, picking the SVG parser for `.svg` and the raster
    /// decoders for everything else. The label is the file stem.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|source| AssetError::Io { path: path.to_path_buf(), source })?;
        let label = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("asset");

        let is_svg = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("svg"));
        if is_svg {
            Self::from_svg_data(label, &bytes)
        } else {
            Self::from_image_bytes(label, &bytes)
        }
    }

    fn sized(label: &str, source: DrawableSource, width: i32, height: i32) -> Result<Self, AssetError> {
        if width <= 0 || height <= 0 {
            log::warn!("drawable '{label}' rejected: {width}x{height}");
            return Err(AssetError::NoIntrinsicSize { label: label.to_string(), width, height });
        }
        Ok(Self { label: Rc::from(label), source, width, height })
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn source(&self) -> &DrawableSource {
        &self.source
    }

    /// Intrinsic width in logical pixels.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Intrinsic height in logical pixels.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }
}

fn to_px(v: f32) -> i32 {
    if v.is_finite() { v.ceil().min(i32::MAX as f32) as i32 } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn png(w: u32, h: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(w, h, image::Rgba([255, 0, 0, 255]));
        let mut buf = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn solid_rejects_empty_size() {
        let err = Drawable::solid("track", 0, 30, [0, 0, 0, 255]).unwrap_err();
        assert!(matches!(err, AssetError::NoIntrinsicSize { width: 0, height: 30, .. }));
    }

    #[test]
    fn png_intrinsic_size_is_pixel_size() {
        let d = Drawable::from_image_bytes("thumb", &png(24, 16)).unwrap();
        assert_eq!((d.width(), d.height()), (24, 16));
        assert!(matches!(d.source(), DrawableSource::Bitmap(_)));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = Drawable::from_image_bytes("thumb", b"not an image").unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }));
    }

    #[test]
    fn svg_intrinsic_size_rounds_up() {
        let svg = br#"<svg xmlns="http://www.w3.org/2000/svg" width="99.5" height="30"></svg>"#;
        let d = Drawable::from_svg_data("track", svg).unwrap();
        assert_eq!((d.width(), d.height()), (100, 30));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Drawable::load("/nonexistent/track.png").unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/track.png"));
    }

    #[test]
    fn clones_share_pixels() {
        let d = Drawable::from_image_bytes("thumb", &png(4, 4)).unwrap();
        let c = d.clone();
        match (d.source(), c.source()) {
            (DrawableSource::Bitmap(a), DrawableSource::Bitmap(b)) => assert!(Rc::ptr_eq(a, b)),
            _ => panic!("expected bitmaps"),
        }
    }
}
