use super::BinomialRow;
use crate::builder::Build;
use crate::Error;

/// `BinomialRow` builder.
///
/// Holds the requested row index; validation happens when the generator
/// is built.
///
/// ## Examples
/// ```
/// use lazygen::builder::{BinomialBuilder, Build};
///
/// let row: Vec<u128> = BinomialBuilder::new(4).build().unwrap().collect();
/// assert_eq!(row, vec![1, 4, 6, 4, 1]);
///
/// assert!(BinomialBuilder::new(-1).build().is_err());
/// ```
#[derive(Clone)]
pub struct BinomialBuilder {
    pub(super) row: i64,
}

impl BinomialBuilder {
    /// The [`BinomialRow`](../../struct.BinomialRow.html) spawned by
    /// this builder will produce row `n` of Pascal's triangle.
    pub fn new(n: i64) -> Self {
        BinomialBuilder { row: n }
    }
}

impl Build<BinomialRow> for BinomialBuilder {
    fn build(self) -> Result<BinomialRow, Error> {
        BinomialRow::generate(self.row)
    }
}
