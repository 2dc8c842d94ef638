use crate::{pixel::Pixel, screen};

/// A finished frame: `3 * width * height` bytes of RGB, row-major, top row first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    size: screen::Size,
    bytes: Vec<u8>,
}

impl PixelBuffer {
    /// A black frame, ready to be filled in place.
    pub(crate) fn zeroed(size: screen::Size) -> Self {
        Self {
            size,
            bytes: vec![0; size.byte_len()],
        }
    }

    pub fn size(&self) -> screen::Size {
        self.size
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn pixels(&self) -> &[Pixel] {
        bytemuck::cast_slice(&self.bytes)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        let index = y as usize * self.size.width as usize + x as usize;
        self.pixels().get(index).copied()
    }

    /// Number of black pixels, i.e. points that never escaped.
    pub fn bounded_count(&self) -> usize {
        self.pixels()
            .iter()
            .filter(|pixel| **pixel == Pixel::BLACK)
            .count()
    }
}

impl AsRef<[u8]> for PixelBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
