use qrcode::types::QrError;
use qrcode::{Color, EcLevel, QrCode};

/// Square module matrix of a QR symbol, bit-packed
///
/// Built once per generation request and read-only afterwards. Indexed by
/// (row, col), row-major, 0-based. Out-of-bounds reads return false so
/// neighborhood checks at the matrix edge need no special casing.
#[derive(Debug, Clone)]
pub struct Matrix {
    size: usize,
    data: Vec<u8>,
}

impl Matrix {
    /// Create an empty matrix with the given side length
    pub fn new(size: usize) -> Self {
        let bytes_needed = (size * size + 7) / 8;
        Self {
            size,
            data: vec![0; bytes_needed],
        }
    }

    /// Encode `text` as a QR symbol at error correction level M and capture
    /// its modules
    ///
    /// The version (and with it the matrix size) is chosen by the encoder.
    /// Encoding failures (e.g. the text exceeds symbol capacity) are
    /// propagated; there is no retry or fallback to a weaker level.
    pub fn from_text(text: &str) -> Result<Self, QrError> {
        let code = QrCode::with_error_correction_level(text, EcLevel::M)?;
        let size = code.width();
        let mut matrix = Self::new(size);
        for (i, color) in code.to_colors().iter().enumerate() {
            if *color == Color::Dark {
                matrix.set(i / size, i % size, true);
            }
        }
        Ok(matrix)
    }

    /// Side length in modules (width = height)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get module at (row, col)
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row >= self.size || col >= self.size {
            return false;
        }
        let index = row * self.size + col;
        let byte_index = index / 8;
        let bit_index = index % 8;
        (self.data[byte_index] >> bit_index) & 1 == 1
    }

    /// Set module at (row, col)
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        if row >= self.size || col >= self.size {
            return;
        }
        let index = row * self.size + col;
        let byte_index = index / 8;
        let bit_index = index % 8;
        if value {
            self.data[byte_index] |= 1 << bit_index;
        } else {
            self.data[byte_index] &= !(1 << bit_index);
        }
    }

    /// Count of filled modules
    pub fn filled_count(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }
}
