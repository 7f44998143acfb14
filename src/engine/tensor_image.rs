//! Engine-side image representation.

use image::DynamicImage;
use ndarray::{Array3, ArrayView3};

use crate::engine::EngineError;

/// Host image handed to a detector.
pub type Bitmap = DynamicImage;

const RGB_CHANNELS: usize = 3;

/// RGB image stored as an `(height, width, channels)` array.
#[derive(Debug, Clone, PartialEq)]
pub struct TensorImage {
    data: Array3<u8>,
}

impl TensorImage {
    /// Convert a host bitmap. Alpha is dropped, grayscale is expanded.
    pub fn from_bitmap(bitmap: &Bitmap) -> Result<Self, EngineError> {
        let rgb = bitmap.to_rgb8();
        let (width, height) = rgb.dimensions();
        // RgbImage is row-major RGB, which is already HWC
        let data = Array3::from_shape_vec(
            (height as usize, width as usize, RGB_CHANNELS),
            rgb.into_raw(),
        )?;
        Ok(Self { data })
    }

    /// Wrap an HWC array that already holds RGB pixels.
    pub fn from_array(data: Array3<u8>) -> Result<Self, EngineError> {
        let (height, width, channels) = data.dim();
        if channels != RGB_CHANNELS {
            return Err(EngineError::InvalidInput {
                expected: (RGB_CHANNELS as u32, height as u32, width as u32),
                got: (channels as u32, height as u32, width as u32),
            });
        }
        Ok(Self { data })
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    pub fn channels(&self) -> usize {
        self.data.dim().2
    }

    pub fn as_array(&self) -> ArrayView3<'_, u8> {
        self.data.view()
    }

    /// Planar (CHW) pixels scaled to [0, 1].
    pub fn to_normalized_nchw(&self) -> Vec<f32> {
        self.data
            .view()
            .permuted_axes([2, 0, 1])
            .iter()
            .map(|&v| v as f32 / 255.0)
            .collect()
    }
}
