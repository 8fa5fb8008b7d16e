use crate::particle::Bounds;

/// The slice of a 2D canvas context the renderer draws through.
///
/// One implementation serves both the visible surface and the off-screen
/// buffer, so `draw_surface` can blit any surface of the same type into
/// another. Coordinates are surface pixels.
pub trait Surface2d {
    fn size(&self) -> Bounds;
    fn set_size(&mut self, bounds: Bounds);

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn begin_path(&mut self);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64);
    fn set_fill_style(&mut self, style: &str);
    fn fill(&mut self);

    /// Copy the whole of `src` onto this surface with its top-left at (dx, dy).
    fn draw_surface(&mut self, src: &Self, dx: f64, dy: f64);
}
