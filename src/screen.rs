use crate::error::{Error, Result};

/// Pixel dimensions of a frame. Fixed for the lifetime of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Length in bytes of an RGB frame of this size.
    pub fn byte_len(&self) -> usize {
        self.pixel_count() * crate::pixel::Pixel::SIZE
    }
}
