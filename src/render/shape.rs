//! Moon phase mask rasterization
//!
//! Produces the illuminated silhouette of the moon's disc for a phase
//! fraction. The mask is a plain grid handed to the external rendering
//! surface; nothing here paints pixels.

use serde::{Deserialize, Serialize};

/// Classification of one mask pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaskPixel {
    /// Outside the moon's disc
    Outside,
    /// On the disc but in shadow
    Dark,
    /// On the disc and illuminated
    Lit,
}

/// Rasterized phase mask, `size` x `size` pixels, row-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoonShapeMask {
    size: u32,
    pixels: Vec<MaskPixel>,
}

impl MoonShapeMask {
    /// Rasterize the mask for a phase fraction and pixel diameter
    ///
    /// Disc pixels lie within `diameter / 2` of the grid center. A disc
    /// pixel is lit by its horizontal offset against the terminator:
    /// with `u` the offset normalized by the disc's half-width at that row
    /// and `k = cos(2 * pi * phase)`, waxing phases (< 0.5) light `u > k`
    /// and waning phases light `u < -k`. Phase 0 and 1 leave the disc fully
    /// dark; phase 0.5 lights it fully.
    pub fn generate(phase: f64, diameter: u32) -> Self {
        let size = diameter;
        let center = (f64::from(size) - 1.0) / 2.0;
        let radius = f64::from(diameter) / 2.0;
        let k = (std::f64::consts::TAU * phase).cos();
        let full_moon = (phase - 0.5).abs() < 1e-9;

        let mut pixels = Vec::with_capacity((size * size) as usize);
        for y in 0..size {
            let dy = f64::from(y) - center;
            for x in 0..size {
                let dx = f64::from(x) - center;
                if dx * dx + dy * dy > radius * radius {
                    pixels.push(MaskPixel::Outside);
                    continue;
                }

                // Half-width of the disc at this row; positive for any
                // in-disc pixel since |dy| < radius on the pixel grid
                let half_width = (radius * radius - dy * dy).sqrt();
                let u = if half_width > 0.0 { dx / half_width } else { 0.0 };

                let lit = if full_moon {
                    true
                } else if phase < 0.5 {
                    u > k
                } else {
                    u < -k
                };

                pixels.push(if lit { MaskPixel::Lit } else { MaskPixel::Dark });
            }
        }

        Self { size, pixels }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn pixel(&self, x: u32, y: u32) -> MaskPixel {
        self.pixels[(y * self.size + x) as usize]
    }

    pub fn is_disc(&self, x: u32, y: u32) -> bool {
        self.pixel(x, y) != MaskPixel::Outside
    }

    pub fn is_lit(&self, x: u32, y: u32) -> bool {
        self.pixel(x, y) == MaskPixel::Lit
    }

    /// Fraction of disc pixels that are lit, in [0, 1]
    pub fn lit_fraction(&self) -> f64 {
        let mut disc = 0usize;
        let mut lit = 0usize;
        for p in &self.pixels {
            match p {
                MaskPixel::Outside => {}
                MaskPixel::Dark => disc += 1,
                MaskPixel::Lit => {
                    disc += 1;
                    lit += 1;
                }
            }
        }
        if disc == 0 {
            0.0
        } else {
            lit as f64 / disc as f64
        }
    }

    /// Text rendering for the demo loop: '#' lit, '.' dark, ' ' outside
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.size * (self.size + 1)) as usize);
        for y in 0..self.size {
            for x in 0..self.size {
                out.push(match self.pixel(x, y) {
                    MaskPixel::Outside => ' ',
                    MaskPixel::Dark => '.',
                    MaskPixel::Lit => '#',
                });
            }
            out.push('\n');
        }
        out
    }
}
