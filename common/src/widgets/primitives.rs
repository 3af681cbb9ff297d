//! Low-level drawing primitives shared across widgets.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, Triangle};

/// Direction an arrow head points to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ArrowDir {
    Up,
    Right,
}

/// Fill an axis-aligned rectangle given by its top-left corner and size.
pub fn fill_rect<D>(
    display: &mut D,
    x: i32,
    y: i32,
    w: u32,
    h: u32,
    style: PrimitiveStyle<Rgb565>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if w == 0 || h == 0 {
        return;
    }
    Rectangle::new(Point::new(x, y), Size::new(w, h))
        .into_styled(style)
        .draw(display)
        .ok();
}

/// Draw a solid arrow head of `size` pixels with its tip at `tip`.
pub fn draw_arrow_head<D>(
    display: &mut D,
    tip: Point,
    dir: ArrowDir,
    size: i32,
    style: PrimitiveStyle<Rgb565>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let half = size / 2;
    let (a, b) = match dir {
        ArrowDir::Up => (tip + Point::new(-half, size), tip + Point::new(half, size)),
        ArrowDir::Right => (tip + Point::new(-size, -half), tip + Point::new(-size, half)),
    };
    Triangle::new(tip, a, b).into_styled(style).draw(display).ok();
}

/// Draw a filled box with a 3 px frame around it.
pub fn draw_framed_box<D>(
    display: &mut D,
    area: Rectangle,
    frame: PrimitiveStyle<Rgb565>,
    fill: PrimitiveStyle<Rgb565>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    area.offset(3).into_styled(frame).draw(display).ok();
    area.into_styled(fill).draw(display).ok();
}
