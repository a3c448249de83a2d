use std::collections::HashSet;

use parking_lot::Mutex;

use crate::{
    error::IdRequestError,
    interface::IdPool,
};

struct State {
    cursor: i64,
    used: HashSet<i64>,
}

/// Pool of ids bounded to the closed range `[min, max]`.
///
/// Freed ids become eligible again in round-robin order: a
/// rotating cursor resumes every scan right past the previous
/// allocation instead of from the bottom of the range. All
/// bookkeeping sits behind one internal lock, so the pool can
/// be shared between threads as-is.
pub struct RangeIdPool {
    min: i64,
    max: i64,
    size: i64,
    state: Mutex<State>,
}

impl RangeIdPool {
    /// Creates a pool over the inclusive range `[min, max]`.
    ///
    /// # Panics
    ///
    /// Panics if `max < min`.
    pub fn new(min: i64, max: i64) -> Self {
        assert!(max >= min, "id range is empty: max < min");
        Self {
            min,
            max,
            size: max - min + 1,
            state: Mutex::new(State {
                cursor: 0,
                used: HashSet::new(),
            }),
        }
    }

    /// Lower bound of the range.
    pub const fn min(&self) -> i64 {
        self.min
    }

    /// Upper bound of the range.
    pub const fn max(&self) -> i64 {
        self.max
    }

    /// Total number of ids the range can hold.
    pub const fn capacity(&self) -> i64 {
        self.size
    }

    /// Number of ids currently handed out.
    pub fn in_use(&self) -> usize {
        self.state.lock().used.len()
    }

    /// Whether every id in the range is currently handed out.
    pub fn is_exhausted(&self) -> bool {
        self.in_use() as i64 == self.size
    }

    /// Requests the first free id at or above `min + offset`.
    ///
    /// Unlike [`IdPool::request`], the scan is linear and never
    /// wraps: once it runs past `max` the call fails even if ids
    /// below `min + offset` are still free. The rotating cursor
    /// is left untouched, only the membership set is shared
    /// between the two strategies.
    pub fn request_from(&self, offset: i64) -> Result<i64, IdRequestError> {
        if offset < 0 || offset >= self.size {
            return Err(IdRequestError::ExhaustedRange);
        }

        let mut state = self.state.lock();
        let mut current = offset;
        while state.used.contains(&current) {
            current += 1;
            if current == self.size {
                return Err(IdRequestError::ExhaustedRange);
            }
        }

        state.used.insert(current);
        Ok(self.min + current)
    }
}

impl IdPool for RangeIdPool {
    type Id = i64;

    fn request(&self) -> Result<i64, IdRequestError> {
        let mut state = self.state.lock();

        let begin = state.cursor;
        while state.used.contains(&state.cursor) {
            state.cursor = (state.cursor + 1) % self.size;
            if state.cursor == begin {
                return Err(IdRequestError::ExhaustedRange);
            }
        }

        let offset = state.cursor;
        state.used.insert(offset);
        state.cursor = (state.cursor + 1) % self.size;

        Ok(self.min + offset)
    }

    fn return_id(&self, id: i64) {
        if id < self.min || id > self.max {
            return;
        }

        let mut state = self.state.lock();
        if state.used.remove(&(id - self.min)) {
            tracing::debug!("freed id {id}");
        }
    }
}
