//! Topologies Braille (Masques de Bits)
//! - Unicode Braille Patterns (U+2800–U+28FF)

pub mod braille;

pub use braille::{BRAILLE_BASE, BrailleCell, get_braille_char};
