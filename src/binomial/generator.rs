use super::BinomialRow;
use crate::{Error, Generator};

impl Generator for BinomialRow {
    type Item = u128;

    /// Produce `C(n,k)` and advance `k`.
    ///
    /// The first pull always yields 1; every later pull derives its
    /// coefficient from the previous one, so the full row never exists
    /// in memory at once. After `n + 1` pulls the generator fails with
    /// [`Error::Exhausted`](../enum.Error.html#variant.Exhausted) for
    /// good.
    fn pull(&mut self) -> Result<u128, Error> {
        if self.k > self.n {
            return Err(Error::Exhausted);
        }
        if self.k > 0 {
            // C(n,k) = C(n,k-1) * (n - k + 1) / k, division exact.
            self.coefficient =
                self.coefficient * (self.n - self.k + 1) / self.k;
        }
        self.k += 1;
        Ok(self.coefficient)
    }
}

impl Iterator for BinomialRow {
    type Item = u128;

    fn next(&mut self) -> Option<u128> {
        self.pull().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BinomialRow {}
