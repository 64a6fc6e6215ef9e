use super::CyclicIterator;
use crate::{Error, Generator};

impl<T: Clone> Generator for CyclicIterator<T> {
    type Item = T;

    /// Produce the element under the cursor, then advance.
    ///
    /// Advancing past the last captured element wraps the cursor back to
    /// 0 and increments the cycle count, so the cursor invariant
    /// `cursor < total_elements` holds after every pull. Pulling from an
    /// empty capture fails with
    /// [`Error::Exhausted`](../enum.Error.html#variant.Exhausted): the
    /// sequence is otherwise infinite, so exhaustion here always means
    /// the source set was empty.
    fn pull(&mut self) -> Result<T, Error> {
        if self.elements.is_empty() {
            return Err(Error::Exhausted);
        }
        let item = self.elements[self.cursor].clone();
        self.cursor += 1;
        if self.cursor == self.elements.len() {
            self.cursor = 0;
            self.cycle_count += 1;
        }
        Ok(item)
    }
}

impl<T: Clone> Iterator for CyclicIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.pull().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.elements.is_empty() {
            (0, Some(0))
        } else {
            (usize::MAX, None)
        }
    }
}
