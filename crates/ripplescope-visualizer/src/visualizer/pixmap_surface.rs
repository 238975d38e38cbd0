//! Software raster surface backed by tiny-skia.
//!
//! Lines are stroked with anti-aliasing; polygons are filled without it so
//! adjacent occluding quads do not leave seams. The pixel buffer is RGBA and
//! stays fully opaque once cleared, so it can be handed to a presenter as is.

use super::surface::DrawSurface;
use image::{ImageFormat, RgbImage};
use ripplescope_core::{Color, RenderError, ScreenPoint};
use std::path::Path;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};
use tracing::debug;

const LINE_WIDTH: f32 = 1.0;

fn paint(color: Color, anti_alias: bool) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, 255);
    paint.anti_alias = anti_alias;
    paint
}

/// Pixel buffer the windowed and headless drivers render into.
pub struct PixmapSurface {
    pixmap: Pixmap,
}

impl std::fmt::Debug for PixmapSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixmapSurface")
            .field("width", &self.pixmap.width())
            .field("height", &self.pixmap.height())
            .finish()
    }
}

impl PixmapSurface {
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        let pixmap =
            Pixmap::new(width, height).ok_or(RenderError::SurfaceAllocation { width, height })?;
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Raw RGBA bytes, row-major.
    pub fn rgba(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Colour of one pixel, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let p = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::new(p.red(), p.green(), p.blue()))
    }

    /// Copy into an `image` RGB buffer, dropping alpha.
    pub fn to_rgb_image(&self) -> RgbImage {
        let rgb: Vec<u8> = self
            .rgba()
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect();
        RgbImage::from_raw(self.width(), self.height(), rgb)
            .unwrap_or_else(|| RgbImage::new(self.width(), self.height()))
    }

    /// Encode the current contents as PNG.
    pub fn save_png(&self, path: &Path) -> Result<(), RenderError> {
        debug!("Writing frame to {}", path.display());
        self.to_rgb_image()
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| RenderError::Export {
                reason: format!("{}: {}", path.display(), e),
            })
    }
}

impl DrawSurface for PixmapSurface {
    fn size(&self) -> (u32, u32) {
        (self.pixmap.width(), self.pixmap.height())
    }

    fn clear(&mut self, color: Color) {
        self.pixmap
            .fill(tiny_skia::Color::from_rgba8(color.r, color.g, color.b, 255));
    }

    fn draw_line(&mut self, from: ScreenPoint, to: ScreenPoint, color: Color) {
        let mut pb = PathBuilder::new();
        pb.move_to(from.x as f32, from.y as f32);
        pb.line_to(to.x as f32, to.y as f32);
        let Some(path) = pb.finish() else {
            return;
        };
        let stroke = Stroke {
            width: LINE_WIDTH,
            ..Default::default()
        };
        self.pixmap.stroke_path(
            &path,
            &paint(color, true),
            &stroke,
            Transform::identity(),
            None,
        );
    }

    fn fill_polygon(&mut self, points: &[ScreenPoint], color: Color) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let mut pb = PathBuilder::new();
        pb.move_to(first.x as f32, first.y as f32);
        for p in rest {
            pb.line_to(p.x as f32, p.y as f32);
        }
        pb.close();
        let Some(path) = pb.finish() else {
            return;
        };
        self.pixmap.fill_path(
            &path,
            &paint(color, false),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Color = Color::new(10, 12, 18);

    #[test]
    fn test_zero_size_surface_fails() {
        assert!(matches!(
            PixmapSurface::new(0, 10),
            Err(RenderError::SurfaceAllocation { width: 0, height: 10 })
        ));
    }

    #[test]
    fn test_clear_fills_every_pixel() {
        let mut surface = PixmapSurface::new(8, 6).unwrap();
        surface.clear(BG);
        for y in 0..6 {
            for x in 0..8 {
                assert_eq!(surface.pixel(x, y), Some(BG));
            }
        }
        assert!(surface.rgba().chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn test_fill_polygon_covers_interior() {
        let mut surface = PixmapSurface::new(20, 20).unwrap();
        surface.clear(BG);
        let white = Color::new(255, 255, 255);
        surface.fill_polygon(
            &[
                ScreenPoint::new(2.0, 2.0),
                ScreenPoint::new(18.0, 2.0),
                ScreenPoint::new(18.0, 18.0),
                ScreenPoint::new(2.0, 18.0),
            ],
            white,
        );
        assert_eq!(surface.pixel(10, 10), Some(white));
        assert_eq!(surface.pixel(0, 0), Some(BG));
    }

    #[test]
    fn test_draw_line_touches_pixels_along_path() {
        let mut surface = PixmapSurface::new(20, 20).unwrap();
        surface.clear(BG);
        let red = Color::new(255, 0, 0);
        surface.draw_line(ScreenPoint::new(0.0, 10.5), ScreenPoint::new(20.0, 10.5), red);
        let px = surface.pixel(10, 10).unwrap();
        assert!(px.r > 200, "line pixel should be mostly red, got {px:?}");
        assert_eq!(surface.pixel(10, 2), Some(BG));
    }

    #[test]
    fn test_empty_polygon_is_ignored() {
        let mut surface = PixmapSurface::new(4, 4).unwrap();
        surface.clear(BG);
        surface.fill_polygon(&[], Color::new(255, 255, 255));
        assert_eq!(surface.pixel(1, 1), Some(BG));
    }

    #[test]
    fn test_to_rgb_image_matches_pixels() {
        let mut surface = PixmapSurface::new(3, 2).unwrap();
        surface.clear(BG);
        let img = surface.to_rgb_image();
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.get_pixel(2, 1).0, [10, 12, 18]);
    }
}
