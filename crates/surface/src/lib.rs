// c3pro - Microcontroller Benchmark Harness
// Copyright (C) 2026 C3PRO Team
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

//! In-memory RGB565 framebuffer used as the render target for the
//! graphics workload.
//!
//! The buffer mirrors the layout of a small SPI display: row-major,
//! two bytes per pixel, little-endian `Rgb565`. Allocation is fallible
//! so a constrained host can fall back to running without graphics
//! instead of aborting.

use std::convert::Infallible;

use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use thiserror::Error;
use tracing::debug;

pub const BYTES_PER_PIXEL: usize = 2;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("Invalid surface dimensions {0}x{1}")]
    BadDimensions(u32, u32),
    #[error("Failed to allocate {0} byte framebuffer")]
    OutOfMemory(usize),
}

/// Row-major RGB565 pixel buffer with checked allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelSurface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelSurface {
    /// Allocates a zeroed `width` x `height` buffer.
    ///
    /// Returns `BadDimensions` when either side is zero or the byte
    /// length does not fit in `usize`, and `OutOfMemory` when the
    /// allocator refuses the request.
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        if width == 0 || height == 0 {
            return Err(SurfaceError::BadDimensions(width, height));
        }
        let len = u64::from(width)
            .checked_mul(u64::from(height))
            .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL as u64))
            .and_then(|bytes| usize::try_from(bytes).ok())
            .ok_or(SurfaceError::BadDimensions(width, height))?;

        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| SurfaceError::OutOfMemory(len))?;
        data.resize(len, 0);
        debug!("Allocated {}x{} surface ({} bytes)", width, height, len);

        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw little-endian RGB565 bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Overwrites every pixel with `color`.
    pub fn fill(&mut self, color: Rgb565) {
        let raw = color.into_storage().to_le_bytes();
        for chunk in self.data.chunks_exact_mut(BYTES_PER_PIXEL) {
            chunk.copy_from_slice(&raw);
        }
    }

    /// Reads back one pixel, or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb565> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = self.offset_of(x, y);
        let raw = u16::from_le_bytes([self.data[offset], self.data[offset + 1]]);
        Some(Rgb565::from(RawU16::new(raw)))
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Rgb565) {
        let offset = self.offset_of(x, y);
        self.data[offset..offset + BYTES_PER_PIXEL]
            .copy_from_slice(&color.into_storage().to_le_bytes());
    }

    fn offset_of(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL
    }
}

impl OriginDimensions for PixelSurface {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for PixelSurface {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        // Out-of-bounds pixels are clipped, matching display drivers.
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            let (x, y) = (point.x as u32, point.y as u32);
            if x >= self.width || y >= self.height {
                continue;
            }
            self.set_pixel(x, y, color);
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_allocates_zeroed_buffer() {
        let surface = PixelSurface::new(240, 240).unwrap();
        assert_eq!(surface.width(), 240);
        assert_eq!(surface.height(), 240);
        assert_eq!(surface.data().len(), 115_200);
        assert!(surface.data().iter().all(|byte| *byte == 0));
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert_eq!(
            PixelSurface::new(0, 240),
            Err(SurfaceError::BadDimensions(0, 240))
        );
        assert_eq!(
            PixelSurface::new(240, 0),
            Err(SurfaceError::BadDimensions(240, 0))
        );
    }

    #[test]
    fn test_fill_writes_little_endian_rgb565() {
        let mut surface = PixelSurface::new(2, 2).unwrap();
        surface.fill(Rgb565::RED);
        assert_eq!(surface.data(), [0x00, 0xF8, 0x00, 0xF8, 0x00, 0xF8, 0x00, 0xF8]);
        assert_eq!(surface.pixel(1, 1), Some(Rgb565::RED));

        surface.fill(Rgb565::BLACK);
        assert!(surface.data().iter().all(|byte| *byte == 0));
    }

    #[test]
    fn test_pixel_round_trips_through_storage() {
        let mut surface = PixelSurface::new(4, 4).unwrap();
        surface.set_pixel(2, 3, Rgb565::GREEN);
        assert_eq!(surface.pixel(2, 3), Some(Rgb565::GREEN));
        assert_eq!(surface.pixel(3, 2), Some(Rgb565::BLACK));
        assert_eq!(surface.pixel(4, 0), None);
        assert_eq!(surface.pixel(0, 4), None);
    }

    #[test]
    fn test_draw_iter_clips_out_of_bounds_pixels() {
        let mut surface = PixelSurface::new(4, 4).unwrap();
        let pixels = [
            Pixel(Point::new(-1, 0), Rgb565::WHITE),
            Pixel(Point::new(0, -1), Rgb565::WHITE),
            Pixel(Point::new(4, 0), Rgb565::WHITE),
            Pixel(Point::new(0, 4), Rgb565::WHITE),
            Pixel(Point::new(1, 2), Rgb565::WHITE),
        ];
        surface.draw_iter(pixels).unwrap();

        let lit: Vec<(u32, u32)> = (0..4)
            .flat_map(|y| (0..4).map(move |x| (x, y)))
            .filter(|(x, y)| surface.pixel(*x, *y) == Some(Rgb565::WHITE))
            .collect();
        assert_eq!(lit, [(1, 2)]);
    }

    #[test]
    fn test_clear_overwrites_previous_frame() {
        let mut surface = PixelSurface::new(8, 8).unwrap();
        surface.set_pixel(5, 5, Rgb565::RED);
        surface.clear(Rgb565::BLUE).unwrap();
        assert!((0..8)
            .flat_map(|y| (0..8).map(move |x| (x, y)))
            .all(|(x, y)| surface.pixel(x, y) == Some(Rgb565::BLUE)));
    }

    #[test]
    fn test_size_reports_dimensions() {
        let surface = PixelSurface::new(120, 80).unwrap();
        assert_eq!(surface.size(), Size::new(120, 80));
    }
}
