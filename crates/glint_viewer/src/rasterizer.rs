//! Turns the camera's sample grid into pixels.

use std::path::Path;

use anyhow::{Context, Result};
use glint_renderer::{CameraConfig, Color, GridView};
use image::{Rgb, RgbImage};

/// Clamp a brightness triple into an 8-bit pixel.
///
/// Brightness is already on the 0..255 scale; there is no tone mapping.
pub fn to_rgb(color: Color) -> Rgb<u8> {
    let channel = |v: f64| v.clamp(0.0, 255.0) as u8;
    Rgb([channel(color.x), channel(color.y), channel(color.z)])
}

/// Persistent output image.
///
/// Cells that are not traced yet are skipped, so the blocks of the previous,
/// coarser pass stay visible underneath until they are covered.
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbImage::new(width, height),
        }
    }

    /// Canvas sized to the coarse grid times its footprint.
    pub fn for_config(config: &CameraConfig) -> Self {
        let (width, height) = config.image_size();
        Self::new(width, height)
    }

    /// Paint every traced cell as a `footprint`-sided square. Returns the
    /// number of cells painted.
    pub fn draw(&mut self, view: GridView<'_>) -> usize {
        let size = view.footprint.max(1);
        let mut painted = 0;

        for (column, row, cell) in view.cells.iter() {
            let Some(color) = cell else {
                continue;
            };
            let pixel = to_rgb(*color);
            let x0 = column as u32 * size;
            let y0 = row as u32 * size;
            for y in y0..(y0 + size).min(self.image.height()) {
                for x in x0..(x0 + size).min(self.image.width()) {
                    self.image.put_pixel(x, y, pixel);
                }
            }
            painted += 1;
        }

        painted
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        self.image
            .save(path)
            .with_context(|| format!("Failed to write image to {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_renderer::Grid;

    fn rasterize(view: GridView<'_>, width: u32, height: u32) -> RgbImage {
        let mut canvas = Canvas::new(width, height);
        canvas.draw(view);
        canvas.image
    }

    #[test]
    fn test_to_rgb_clamps() {
        assert_eq!(to_rgb(Color::new(-3.0, 12.7, 900.0)), Rgb([0, 12, 255]));
    }

    #[test]
    fn test_cells_fill_footprint_squares() {
        let cells = Grid::new_with(2, 1, |c, _| Some(Color::splat(if c == 0 { 10.0 } else { 200.0 })));
        let image = rasterize(GridView { cells: &cells, footprint: 2 }, 4, 2);

        assert_eq!(image.get_pixel(0, 0), &Rgb([10, 10, 10]));
        assert_eq!(image.get_pixel(1, 1), &Rgb([10, 10, 10]));
        assert_eq!(image.get_pixel(2, 0), &Rgb([200, 200, 200]));
        assert_eq!(image.get_pixel(3, 1), &Rgb([200, 200, 200]));
    }

    #[test]
    fn test_unset_cells_keep_previous_pixels() {
        let mut canvas = Canvas::new(4, 4);
        let coarse = Grid::new_with(1, 1, |_, _| Some(Color::splat(50.0)));
        canvas.draw(GridView { cells: &coarse, footprint: 4 });

        let mut fine = coarse.refined(None);
        fine.set(0, 0, Some(Color::splat(100.0)));
        let painted = canvas.draw(GridView { cells: &fine, footprint: 2 });

        assert_eq!(painted, 1);
        assert_eq!(canvas.image().get_pixel(1, 1), &Rgb([100, 100, 100]));
        assert_eq!(canvas.image().get_pixel(2, 0), &Rgb([50, 50, 50]));
        assert_eq!(canvas.image().get_pixel(3, 3), &Rgb([50, 50, 50]));
    }

    #[test]
    fn test_coarse_pass_fills_whole_blocks() {
        use glint_core::{Light, Material, Surface, Viewpoint};
        use glint_renderer::{Camera, Command, DVec3};
        use std::f64::consts::FRAC_PI_2;

        let surfaces = [Surface::new(
            DVec3::new(-100.0, -100.0, 0.0),
            DVec3::new(400.0, 0.0, 0.0),
            DVec3::new(0.0, 400.0, 0.0),
            Material::diffuse(Color::new(0.8, 0.6, 0.4)),
        )];
        let lights = [Light::point(1_000_000.0, DVec3::new(10.0, 0.0, 10.0))];
        let config = CameraConfig::default().with_resolution(4, 3).with_footprint(4);
        let viewpoint = Viewpoint::new(DVec3::new(0.0, 0.0, 5.0), 0.0, FRAC_PI_2 + 0.6);
        let mut camera = Camera::new(config, viewpoint);
        let mut canvas = Canvas::for_config(&config);

        camera.tick(&surfaces, &lights, Command::None);
        canvas.draw(camera.sample_grid());

        let cell = camera.sample_grid().cells.get(0, 0).copied().flatten().unwrap();
        let expected = to_rgb(cell);
        assert_ne!(expected, Rgb([0, 0, 0]));
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(canvas.image().get_pixel(x, y), &expected);
            }
        }
    }

    #[test]
    fn test_cells_outside_canvas_are_clipped() {
        let cells = Grid::new_with(3, 1, |_, _| Some(Color::splat(1.0)));
        let image = rasterize(GridView { cells: &cells, footprint: 2 }, 5, 2);
        assert_eq!(image.get_pixel(4, 1), &Rgb([1, 1, 1]));
    }
}
