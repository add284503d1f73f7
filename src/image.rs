use crate::error::ImageError;
use crate::pixel::Rgb;

/// An owned RGB8 image with a row-major pixel buffer.
///
/// `pixels().len() == width() * height()` always holds. Operations that
/// change the size replace width, height and buffer in a single step.
///
/// The grayscale flag only affects encoding: encoders emit
/// [`Rgb::to_grayscale`] of each pixel while the stored buffer is left as is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    grayscale: bool,
    pixels: Vec<Rgb>,
}

pub(crate) fn pixel_count(width: u32, height: u32) -> Result<usize, ImageError> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(ImageError::DimensionsTooLarge { width, height })
}

impl Image {
    /// A black image of the given size.
    ///
    /// # Panics
    ///
    /// If `width * height` overflows `usize`.
    pub fn new(width: u32, height: u32) -> Self {
        let len = (width as usize)
            .checked_mul(height as usize)
            .expect("image dimensions overflow usize");
        Self {
            width,
            height,
            grayscale: false,
            pixels: vec![Rgb::BLACK; len],
        }
    }

    /// Wrap an existing row-major buffer.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgb>) -> Result<Self, ImageError> {
        let needed = pixel_count(width, height)?;
        if pixels.len() != needed {
            return Err(ImageError::BufferSizeMismatch {
                needed,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            grayscale: false,
            pixels,
        })
    }

    /// Build an image by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Rgb) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            grayscale: false,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn is_grayscale(&self) -> bool {
        self.grayscale
    }

    pub fn set_grayscale(&mut self, grayscale: bool) {
        self.grayscale = grayscale;
    }

    /// Flip the write-time grayscale flag.
    pub fn toggle_grayscale(&mut self) {
        self.grayscale = !self.grayscale;
    }

    /// Builder-style [`Image::set_grayscale`].
    pub fn with_grayscale(mut self, grayscale: bool) -> Self {
        self.grayscale = grayscale;
        self
    }

    /// Pixel at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// If the coordinates are outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        match self.get_pixel(x, y) {
            Some(p) => p,
            None => panic!(
                "pixel coordinates ({x}, {y}) out of bounds for {}x{} image",
                self.width, self.height
            ),
        }
    }

    /// Pixel at column `x`, row `y`, or `None` outside the image.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Mutable access to pixel values. The length cannot change.
    pub fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.pixels
    }

    pub fn into_pixels(self) -> Vec<Rgb> {
        self.pixels
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> core::slice::ChunksExact<'_, Rgb> {
        // A zero-width image has an empty buffer, so chunking by 1 yields no rows.
        self.pixels.chunks_exact((self.width as usize).max(1))
    }

    /// Replace width, height and buffer together.
    ///
    /// On error the image is left unchanged.
    pub fn replace_pixels(
        &mut self,
        width: u32,
        height: u32,
        pixels: Vec<Rgb>,
    ) -> Result<(), ImageError> {
        let grayscale = self.grayscale;
        *self = Self::from_pixels(width, height, pixels)?.with_grayscale(grayscale);
        Ok(())
    }

    /// Pixel as an encoder should emit it, honouring the grayscale flag.
    #[inline]
    pub(crate) fn rendered(&self, p: Rgb) -> Rgb {
        if self.grayscale { p.to_grayscale() } else { p }
    }

    /// Resize by box-filter averaging. See [`crate::resample::downsample`].
    pub fn downsample(&mut self, factor: u32) {
        *self = crate::resample::downsample(self, factor);
    }

    /// Resize by bilinear interpolation. See [`crate::resample::upsample`].
    pub fn upsample(&mut self, factor: u32) {
        *self = crate::resample::upsample(self, factor);
    }

    /// Copy into an [`imgref::ImgVec`] of [`rgb::RGB8`].
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> imgref::ImgVec<rgb::RGB8> {
        imgref::ImgVec::new(
            self.pixels.iter().map(|&p| rgb::RGB8::from(p)).collect(),
            self.width as usize,
            self.height as usize,
        )
    }

    /// Copy an [`imgref::ImgRef`] into a new image, dropping any stride padding.
    #[cfg(feature = "imgref")]
    pub fn from_imgref(img: imgref::ImgRef<'_, rgb::RGB8>) -> Result<Self, ImageError> {
        let width = u32::try_from(img.width()).map_err(|_| ImageError::DimensionsTooLarge {
            width: u32::MAX,
            height: u32::MAX,
        })?;
        let height = u32::try_from(img.height()).map_err(|_| ImageError::DimensionsTooLarge {
            width,
            height: u32::MAX,
        })?;
        let pixels = img.rows().flatten().map(|&p| Rgb::from(p)).collect();
        Self::from_pixels(width, height, pixels)
    }
}
