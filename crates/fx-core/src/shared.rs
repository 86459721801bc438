//! Last-published rotation angles, shared with components that want to stay
//! in phase with the hero (single writer, many readers).

use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

pub type AngleSnapshot = SmallVec<[f32; 4]>;

/// The only handle that can publish. Deliberately not `Clone`.
#[derive(Debug)]
pub struct AngleWriter {
    inner: Rc<RefCell<AngleSnapshot>>,
}

#[derive(Clone, Debug)]
pub struct AngleReader {
    inner: Rc<RefCell<AngleSnapshot>>,
}

pub fn angle_board(tracks: usize) -> (AngleWriter, AngleReader) {
    let inner: Rc<RefCell<AngleSnapshot>> = Rc::new(RefCell::new(SmallVec::from_elem(0.0, tracks)));
    (
        AngleWriter {
            inner: inner.clone(),
        },
        AngleReader { inner },
    )
}

impl AngleWriter {
    pub fn publish(&self, angles: impl IntoIterator<Item = f32>) {
        let mut slot = self.inner.borrow_mut();
        slot.clear();
        slot.extend(angles);
    }
}

impl AngleReader {
    pub fn get(&self, index: usize) -> Option<f32> {
        self.inner.borrow().get(index).copied()
    }

    pub fn snapshot(&self) -> AngleSnapshot {
        self.inner.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
