use std::{cell::Cell, rc::Rc};

/// Counts live [`Tracked`] values and optionally makes cloning panic.
#[derive(Debug, Default)]
pub struct Counter {
    live: Cell<isize>,
    fuse: Cell<Option<usize>>,
}

impl Counter {
    pub fn new() -> Rc<Self> {
        Rc::default()
    }

    pub fn live(&self) -> isize {
        self.live.get()
    }

    /// The next `clones` clones succeed, the one after that panics.
    pub fn arm(&self, clones: usize) {
        self.fuse.set(Some(clones));
    }

    pub fn disarm(&self) {
        self.fuse.set(None);
    }
}

/// An element that reports its construction and destruction to a
/// [`Counter`]. Dropping it twice drives the count below zero.
#[derive(Debug)]
pub struct Tracked {
    pub value: u32,
    counter: Rc<Counter>,
}

impl Tracked {
    pub fn new(value: u32, counter: &Rc<Counter>) -> Self {
        counter.live.set(counter.live.get() + 1);
        Self {
            value,
            counter: Rc::clone(counter),
        }
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        if let Some(remaining) = self.counter.fuse.get() {
            if remaining == 0 {
                panic!("clone fuse blown");
            }
            self.counter.fuse.set(Some(remaining - 1));
        }
        Self::new(self.value, &self.counter)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        let live = self.counter.live.get() - 1;
        assert!(live >= 0, "dropped more values than were built");
        self.counter.live.set(live);
    }
}

impl PartialEq<u32> for Tracked {
    fn eq(&self, other: &u32) -> bool {
        self.value == *other
    }
}
