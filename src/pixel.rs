//! Packed RGB and planar YCbCr pixels.
//!
//! Conversions use the BT.601 full-range coefficients. Every channel is
//! computed in `f64`, rounded half away from zero and clamped to `0..=255`.

/// Three 8-bit channels in red, green, blue order.
///
/// Byte order only matters at the file boundary (BMP stores B, G, R).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Luma plus blue-difference and red-difference chroma, 8 bits each.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Yuv {
    pub y: u8,
    pub cb: u8,
    pub cr: u8,
}

// Forward (RGB -> YCbCr)
const RGB_TO_Y: [f64; 3] = [0.299, 0.587, 0.114];
const RGB_TO_CB: [f64; 3] = [-0.168736, -0.331264, 0.5];
const RGB_TO_CR: [f64; 3] = [0.5, -0.418688, -0.081312];

// Inverse (YCbCr -> RGB), applied to chroma centred on zero
const CR_TO_R: f64 = 1.402;
const CB_TO_G: f64 = -0.344136;
const CR_TO_G: f64 = -0.714136;
const CB_TO_B: f64 = 1.772;

const CHROMA_CENTER: f64 = 128.0;

#[inline]
fn clamp_u8(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Luma of this pixel.
    #[inline]
    pub fn luma(self) -> u8 {
        let (r, g, b) = (f64::from(self.r), f64::from(self.g), f64::from(self.b));
        clamp_u8(RGB_TO_Y[0] * r + RGB_TO_Y[1] * g + RGB_TO_Y[2] * b)
    }

    /// Replace all three channels with the luma. Irreversible.
    #[inline]
    pub fn to_grayscale(self) -> Self {
        let y = self.luma();
        Self::new(y, y, y)
    }

    /// Channels in on-disk BMP order.
    #[inline]
    pub(crate) fn to_bgr(self) -> [u8; 3] {
        [self.b, self.g, self.r]
    }

    #[inline]
    pub(crate) fn from_bgr(bgr: &[u8]) -> Self {
        Self::new(bgr[2], bgr[1], bgr[0])
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl Yuv {
    pub const fn new(y: u8, cb: u8, cr: u8) -> Self {
        Self { y, cb, cr }
    }

    /// Zero both chroma channels, keeping luma.
    ///
    /// This is the planar-domain grayscale; it is not equivalent to
    /// [`Rgb::to_grayscale`], since zero chroma is far from the neutral 128.
    #[inline]
    pub fn to_grayscale(self) -> Self {
        Self::new(self.y, 0, 0)
    }
}

impl From<Rgb> for Yuv {
    #[inline]
    fn from(p: Rgb) -> Self {
        let (r, g, b) = (f64::from(p.r), f64::from(p.g), f64::from(p.b));
        Self {
            y: clamp_u8(RGB_TO_Y[0] * r + RGB_TO_Y[1] * g + RGB_TO_Y[2] * b),
            cb: clamp_u8(CHROMA_CENTER + RGB_TO_CB[0] * r + RGB_TO_CB[1] * g + RGB_TO_CB[2] * b),
            cr: clamp_u8(CHROMA_CENTER + RGB_TO_CR[0] * r + RGB_TO_CR[1] * g + RGB_TO_CR[2] * b),
        }
    }
}

impl From<Yuv> for Rgb {
    #[inline]
    fn from(p: Yuv) -> Self {
        let y = f64::from(p.y);
        let u = f64::from(p.cb) - CHROMA_CENTER;
        let v = f64::from(p.cr) - CHROMA_CENTER;
        Self {
            r: clamp_u8(y + CR_TO_R * v),
            g: clamp_u8(y + CB_TO_G * u + CR_TO_G * v),
            b: clamp_u8(y + CB_TO_B * u),
        }
    }
}

#[cfg(feature = "rgb")]
impl From<rgb::RGB8> for Rgb {
    fn from(p: rgb::RGB8) -> Self {
        Self::new(p.r, p.g, p.b)
    }
}

#[cfg(feature = "rgb")]
impl From<Rgb> for rgb::RGB8 {
    fn from(p: Rgb) -> Self {
        rgb::RGB8::new(p.r, p.g, p.b)
    }
}
