use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;

/// Smallest palette that leaves room for both ramps and the black entry.
pub const MIN_PALETTE_SIZE: usize = 4;

// 198 / 255: the green level where the red ramp tops out as orange
const ORANGE_GREEN_FRACTION: f64 = 0.776_470_588_235_294_1;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaletteError {
    #[error("palette size {size} is below the minimum of {minimum}")]
    TooSmall { size: usize, minimum: usize },
    #[error("iteration index {index} is outside a palette of {len} colours")]
    IndexOutOfRange { index: u32, len: usize },
}

/// Escape-time colours: black to red over the first quarter, red to orange
/// over the rest, and black in the final slot for points that never escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colours: Vec<Colour>,
}

impl Palette {
    pub fn build(size: usize) -> Result<Self, PaletteError> {
        if size < MIN_PALETTE_SIZE {
            return Err(PaletteError::TooSmall {
                size,
                minimum: MIN_PALETTE_SIZE,
            });
        }

        let mut colours = vec![Colour::BLACK; size];
        let quarter = size / 4;

        for (i, colour) in colours.iter_mut().enumerate().take(quarter) {
            let red = (i as f64 / quarter as f64 * 255.0).round() as u8;
            *colour = Colour::opaque(red, 0, 0);
        }

        // The orange ramp starts on the last red entry and overwrites it.
        let start = quarter - 1;
        let span = (size - start - 1) as f64;

        for (offset, colour) in colours[start..size - 1].iter_mut().enumerate() {
            let green = (offset as f64 / span * ORANGE_GREEN_FRACTION * 255.0).round() as u8;
            *colour = Colour::opaque(255, green, 0);
        }

        colours[size - 1] = Colour::BLACK;

        Ok(Self { colours })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    #[must_use]
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }
}

impl ColourMap for Palette {
    type T = u32;
    type Failure = PaletteError;

    fn map(&self, index: u32) -> Result<Colour, PaletteError> {
        self.colours
            .get(index as usize)
            .copied()
            .ok_or(PaletteError::IndexOutOfRange {
                index,
                len: self.colours.len(),
            })
    }
}
