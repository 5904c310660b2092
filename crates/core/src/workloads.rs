//! The four timed tasks.
//!
//! Each routine is stateless and discards its result through
//! [`black_box`], so the measured work survives optimization. Wall-clock
//! duration is the only observable output; the constants below are part of
//! the timing signature and must not change.

use std::hint::black_box;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use profont::PROFONT_10_POINT;

/// Primality is tested for every integer in `[2, PRIME_LIMIT)`.
pub const PRIME_LIMIT: u32 = 3000;

/// Iterations of the floating-point loop.
pub const FLOAT_ITERATIONS: u32 = 30_000;

/// Size of the buffer cloned by the memory workload.
pub const MEMORY_BUFFER_BYTES: usize = 10 * 1024;

/// Full-buffer clones performed by the memory workload.
pub const MEMORY_COPY_PASSES: usize = 300;

/// Frames rendered by the graphics workload.
pub const RENDER_FRAMES: usize = 100;

// Render palette. RGB565 raw values: 0x0000, 0xF800, 0x07E0, 0xFFFF.
pub const CLEAR_COLOR: Rgb565 = Rgb565::BLACK;
pub const RECT_COLOR: Rgb565 = Rgb565::RED;
pub const LINE_COLOR: Rgb565 = Rgb565::GREEN;
pub const TEXT_COLOR: Rgb565 = Rgb565::WHITE;

const TEXT_STYLE: MonoTextStyle<'static, Rgb565> =
    MonoTextStyle::new(&PROFONT_10_POINT, TEXT_COLOR);

/// Trial-division primality scan over `[2, PRIME_LIMIT)`.
///
/// Deliberately not a sieve: the per-candidate division cost is the measured
/// quantity.
pub fn integer_math() {
    let mut primes = 0u32;
    for candidate in 2..PRIME_LIMIT {
        if is_prime(candidate) {
            primes += 1;
        }
    }
    black_box(primes);
}

/// 30 000 rounds of `x = sin(x) * cos(i)` on `f64`, starting from 0.5.
pub fn float_math() {
    black_box(float_math_value());
}

/// Clone a 10 KiB buffer 300 times: allocation plus copy bandwidth, not
/// computation.
pub fn memory_bus() {
    let data = vec![0u8; MEMORY_BUFFER_BYTES];
    for _ in 0..MEMORY_COPY_PASSES {
        let copy = data.clone();
        black_box(copy);
    }
}

/// Render a fixed frame [`RENDER_FRAMES`] times: clear to black, filled red
/// rectangle, green diagonal, white label.
///
/// Draw errors are discarded; the workload never raises.
pub fn graphics_render<D>(surface: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    let endpoint = diagonal_endpoint(surface.bounding_box().size);

    let rect = Rectangle::new(Point::new(10, 10), Size::new(100, 100))
        .into_styled(PrimitiveStyle::with_fill(RECT_COLOR));
    let diagonal =
        Line::new(Point::zero(), endpoint).into_styled(PrimitiveStyle::with_stroke(LINE_COLOR, 1));

    for _ in 0..RENDER_FRAMES {
        surface.clear(CLEAR_COLOR).ok();
        rect.draw(surface).ok();
        diagonal.draw(surface).ok();
        Text::with_baseline("C3-PRO", Point::new(80, 110), TEXT_STYLE, Baseline::Top)
            .draw(surface)
            .ok();
    }
}

/// Endpoint of the diagonal, one past the surface's last pixel. Saturates
/// at `i32::MAX`; anything past that clips like any other out-of-bounds
/// draw, it must never wrap negative.
pub(crate) fn diagonal_endpoint(size: Size) -> Point {
    Point::new(
        i32::try_from(size.width).unwrap_or(i32::MAX),
        i32::try_from(size.height).unwrap_or(i32::MAX),
    )
}

/// Divisibility check up to `floor(sqrt(n))`, short-circuiting at the first
/// divisor.
pub(crate) fn is_prime(n: u32) -> bool {
    let bound = f64::from(n).sqrt() as u32;
    for divisor in 2..=bound {
        if n % divisor == 0 {
            return false;
        }
    }
    true
}

/// The floating-point loop itself; the final value is bit-deterministic and
/// doubles as a regression check.
pub(crate) fn float_math_value() -> f64 {
    let mut x = 0.5_f64;
    for i in 0..FLOAT_ITERATIONS {
        x = x.sin() * f64::from(i).cos();
    }
    x
}
