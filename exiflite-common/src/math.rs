//! Checked arithmetic for buffer offsets

#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("Operation {0:?} + {1:?} failed")]
    AddFailed(Option<u64>, Option<u64>),
    #[error("Operation {0:?} - {1:?} failed")]
    SubFailed(Option<u64>, Option<u64>),
    #[error("Operation {0:?} * {1:?} failed")]
    MulFailed(Option<u64>, Option<u64>),
    #[error("Conversion failed for value {0:?}")]
    ConversionFailed(Option<u64>),
}

/// Arithmetic that reports overflow as [`MathError`] instead of wrapping
///
/// ```
/// # use exiflite_common::math::SafeArith;
/// assert_eq!(2_usize.safe_add(3), Ok(5));
/// assert!(u32::MAX.safe_add(1).is_err());
/// assert!(1_u16.safe_sub(2).is_err());
/// ```
pub trait SafeArith: Sized {
    fn safe_add(self, rhs: Self) -> Result<Self, MathError>;
    fn safe_sub(self, rhs: Self) -> Result<Self, MathError>;
    fn safe_mul(self, rhs: Self) -> Result<Self, MathError>;
}

macro_rules! impl_safe_arith {
    ($($t:ty),*) => {
        $(
            impl SafeArith for $t {
                fn safe_add(self, rhs: Self) -> Result<Self, MathError> {
                    self.checked_add(rhs)
                        .ok_or_else(|| MathError::AddFailed(self.try_into().ok(), rhs.try_into().ok()))
                }

                fn safe_sub(self, rhs: Self) -> Result<Self, MathError> {
                    self.checked_sub(rhs)
                        .ok_or_else(|| MathError::SubFailed(self.try_into().ok(), rhs.try_into().ok()))
                }

                fn safe_mul(self, rhs: Self) -> Result<Self, MathError> {
                    self.checked_mul(rhs)
                        .ok_or_else(|| MathError::MulFailed(self.try_into().ok(), rhs.try_into().ok()))
                }
            }
        )*
    };
}

impl_safe_arith!(u16, u32, u64, usize);

/// Lossless conversion into `usize`
pub trait ToUsize: Copy + Into<u64> {
    fn usize(self) -> Result<usize, MathError> {
        let value: u64 = self.into();
        usize::try_from(value).map_err(|_| MathError::ConversionFailed(Some(value)))
    }
}

impl ToUsize for u16 {}
impl ToUsize for u32 {}
