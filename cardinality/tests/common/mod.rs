// disable dead code warning for this module as each test binary only uses
// part of it
#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

/// An iterator that records how many items have been drawn from it.
///
/// It reports no length, so it is always treated as single-pass.
pub(crate) struct Counted<I> {
    iter: I,
    drawn: Rc<Cell<usize>>,
}

impl<I: Iterator> Counted<I> {
    pub(crate) fn new(iter: I) -> (Self, Rc<Cell<usize>>) {
        let drawn = Rc::new(Cell::new(0));
        (
            Counted {
                iter,
                drawn: drawn.clone(),
            },
            drawn,
        )
    }
}

impl<I: Iterator> Iterator for Counted<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let next = self.iter.next();
        if next.is_some() {
            self.drawn.set(self.drawn.get() + 1);
        }
        next
    }
}

/// A generator of `size` items.
pub(crate) fn generate(size: usize) -> Counted<std::ops::Range<usize>> {
    Counted::new(0..size).0
}
