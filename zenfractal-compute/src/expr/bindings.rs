use crate::ExprError;
use zenfractal_core::{Complex, Scalar};

/// Number of variable slots, one per letter `a..z`.
pub const BINDING_SLOTS: usize = (b'z' - b'a' + 1) as usize;

/// A validated variable name in `a..z`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Letter(u8);

impl Letter {
    pub const C: Letter = Letter(b'c' - b'a');
    pub const Z: Letter = Letter(b'z' - b'a');

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn as_char(self) -> char {
        char::from(b'a' + self.0)
    }
}

impl TryFrom<char> for Letter {
    type Error = ExprError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c.is_ascii_lowercase() {
            Ok(Letter(c as u8 - b'a'))
        } else {
            Err(ExprError::OutOfRange(c))
        }
    }
}

/// Fixed table of complex values for the variables `a..z`.
///
/// Every slot starts at zero, so reading a letter that was never set is not
/// an error.
#[derive(Clone, Debug, PartialEq)]
pub struct BindingTable<S> {
    slots: [Complex<S>; BINDING_SLOTS],
}

impl<S: Scalar> BindingTable<S> {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| Complex::zero()),
        }
    }

    #[inline]
    pub fn get(&self, letter: Letter) -> &Complex<S> {
        &self.slots[letter.index()]
    }

    #[inline]
    pub fn set(&mut self, letter: Letter, value: Complex<S>) {
        self.slots[letter.index()] = value;
    }
}

impl<S: Scalar> Default for BindingTable<S> {
    fn default() -> Self {
        Self::new()
    }
}
