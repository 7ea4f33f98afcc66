use crate::gui::theme;
use blizzard_core::anim::{AnimationDriver, FrameDriver};
use blizzard_core::container::BlizzardContainer;
use blizzard_core::geometry::Contour;
use cairo::{Antialias, Context, FillRule, Format, ImageSurface};
use std::path::Path;
use std::time::Duration;

fn trace_contours(cr: &Context, contours: &[Contour]) {
    for contour in contours {
        let mut points = contour.points.iter();
        if let Some(first) = points.next() {
            cr.move_to(first.x, first.y);
            points.for_each(|p| cr.line_to(p.x, p.y));
            cr.close_path();
        }
    }
}

pub fn draw<D: AnimationDriver>(
    cr: &Context,
    container: &BlizzardContainer<D>,
) -> Result<(), cairo::Error> {
    let (r, g, b, a) = theme::accent().into_components();

    cr.save()?;
    cr.set_source_rgba(r, g, b, a);
    cr.set_antialias(Antialias::Best);
    cr.set_fill_rule(FillRule::EvenOdd);

    for (_, contours) in container.frames() {
        cr.new_path();
        trace_contours(cr, &contours);
        cr.fill()?;
    }
    cr.restore()
}

/// Renders the indicator `at` into a fresh image surface, as if it had been
/// running for that long.
pub fn render(
    width: i32,
    height: i32,
    density: f64,
    at: Duration,
) -> Result<ImageSurface, cairo::Error> {
    let mut container = BlizzardContainer::new(FrameDriver::new(), density);
    container.resize(width as f64, height as f64);
    container.show();
    container.advance(Duration::ZERO);
    container.advance(at);

    let surface = ImageSurface::create(Format::ARgb32, width, height)?;
    {
        let cr = Context::new(&surface)?;
        draw(&cr, &container)?;
    }
    surface.flush();
    Ok(surface)
}

pub fn write_snapshot(
    path: &Path,
    width: i32,
    height: i32,
    density: f64,
    at: Duration,
) -> anyhow::Result<()> {
    let surface = render(width, height, density, at)?;
    let mut file = fs_err::File::create(path)?;
    surface.write_to_png(&mut file)?;
    log::info!("Wrote snapshot to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(surface: &mut ImageSurface, x: i32, y: i32) -> [u8; 4] {
        let stride = surface.stride() as usize;
        let data = surface.data().unwrap();
        let offset = y as usize * stride + x as usize * 4;
        [data[offset], data[offset + 1], data[offset + 2], data[offset + 3]]
    }

    #[test]
    fn test_rendered_ring_has_accent_pixels() {
        let mut surface = render(200, 200, 1.0, Duration::ZERO).unwrap();

        // thick side of ring A's crescent, on its tilt axis
        let on_ring = u32::from_ne_bytes(pixel(&mut surface, 63, 100));
        let (a, r, b) = (on_ring >> 24, (on_ring >> 16) & 0xff, on_ring & 0xff);
        assert_eq!(a, 0xff);
        assert!(b > r);

        // nothing covers the very center
        let center = u32::from_ne_bytes(pixel(&mut surface, 100, 100));
        assert_eq!(center >> 24, 0);
    }
}
