use crate::{Error, Generator};

/// Lazy generator of one row of Pascal's triangle.
///
/// [`BinomialRow`] produces the `n + 1` binomial coefficients
/// `C(n,0), C(n,1), ..., C(n,n)` one at a time. Each coefficient is
/// computed from the previous one with the recurrence
/// `C(n,k) = C(n,k-1) * (n - k + 1) / k`, where the division is always
/// exact at the point it is performed, so the only state retained
/// between pulls is the last coefficient. The row itself is never
/// materialized by the generator; collecting it is the caller's choice,
/// for instance with [`BinomialRow::row()`].
///
/// After the last coefficient, the sequence is exhausted for good:
/// further pulls fail with
/// [`Error::Exhausted`](../enum.Error.html#variant.Exhausted) and a
/// fresh [`generate()`](struct.BinomialRow.html#method.generate) call is
/// required to produce the row again.
///
/// Coefficients are exact `u128` integers. Rows past
/// [`MAX_ROW`](struct.BinomialRow.html#associatedconstant.MAX_ROW) would
/// overflow the intermediate product of the recurrence and are rejected
/// at construction.
///
/// ## Examples
///
/// ```
/// use lazygen::{BinomialRow, Generator};
///
/// let mut row = BinomialRow::generate(4).unwrap();
/// assert_eq!(row.pull(), Ok(1));
/// assert_eq!(row.pull(), Ok(4));
/// assert_eq!(row.pull(), Ok(6));
/// assert_eq!(row.pull(), Ok(4));
/// assert_eq!(row.pull(), Ok(1));
/// assert!(row.pull().is_err());
///
/// assert_eq!(BinomialRow::row(4).unwrap(), vec![1, 4, 6, 4, 1]);
/// ```
///
/// [`BinomialRow`] can also be built from a
/// [builder pattern](../builder/struct.BinomialBuilder.html) and a
/// [configuration](config/struct.BinomialConfig.html).
pub struct BinomialRow {
    pub(super) n: u128,
    // Position of the next coefficient to produce, in [0, n + 1].
    pub(super) k: u128,
    pub(super) coefficient: u128,
}

impl BinomialRow {
    /// Largest accepted row index.
    ///
    /// For every row up to this bound, the intermediate product
    /// `C(n,k-1) * (n - k + 1)` of the recurrence fits a `u128`, so the
    /// arithmetic stays exact for the whole row.
    pub const MAX_ROW: i64 = 120;

    /// Start the lazy production of row `n` of Pascal's triangle.
    ///
    /// Returns
    /// [`Error::InvalidArgument`](../enum.Error.html#variant.InvalidArgument)
    /// when `n` is negative or greater than
    /// [`MAX_ROW`](struct.BinomialRow.html#associatedconstant.MAX_ROW).
    pub fn generate(n: i64) -> Result<Self, Error> {
        if n < 0 {
            return Err(Error::InvalidArgument(format!(
                "row index must be non-negative, got {}",
                n
            )));
        }
        if n > Self::MAX_ROW {
            return Err(Error::InvalidArgument(format!(
                "row index {} exceeds {}, the largest row whose \
                 coefficients fit exact 128-bit arithmetic",
                n,
                Self::MAX_ROW
            )));
        }
        Ok(BinomialRow {
            n: n as u128,
            k: 0,
            coefficient: 1,
        })
    }

    /// Eagerly collect row `n` into a vector of `n + 1` coefficients.
    ///
    /// Convenience over [`generate()`](struct.BinomialRow.html#method.generate)
    /// with the same failure conditions; the materialization happens
    /// here, on the caller side of the generator contract.
    pub fn row(n: i64) -> Result<Vec<u128>, Error> {
        let mut generator = Self::generate(n)?;
        let mut row = Vec::with_capacity(generator.remaining());
        while let Ok(coefficient) = generator.pull() {
            row.push(coefficient);
        }
        Ok(row)
    }

    /// Get the number of coefficients left to produce.
    pub fn remaining(&self) -> usize {
        (self.n + 1 - self.k) as usize
    }
}
