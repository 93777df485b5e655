/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use std::collections::VecDeque;
use serde::ser::{Serialize, Serializer, SerializeSeq};

/// a bounded FIFO that evicts its oldest element once `capacity` is reached.
/// We keep the bound explicitly since `VecDeque::with_capacity` only guarantees a lower bound
/// for the allocated space, i.e. we cannot use `VecDeque::capacity()` to detect overflow
#[derive(Clone,PartialEq)]
pub struct RingBuffer<T> {
    capacity: usize,
    items: VecDeque<T>,
}

impl<T> RingBuffer<T> {
    /// note that a zero capacity is bumped to 1 - a ringbuffer that can't hold anything is not useful
    pub fn new (capacity: usize)->Self {
        let capacity = capacity.max(1);
        RingBuffer { capacity, items: VecDeque::with_capacity(capacity) }
    }

    #[inline] pub fn capacity (&self)->usize { self.capacity }
    #[inline] pub fn len (&self)->usize { self.items.len() }
    #[inline] pub fn is_empty (&self)->bool { self.items.is_empty() }
    #[inline] pub fn is_full (&self)->bool { self.items.len() == self.capacity }

    /// append `t` and return the evicted oldest element if we were already full
    pub fn push (&mut self, t: T)->Option<T> {
        let evicted = if self.is_full() { self.items.pop_front() } else { None };
        self.items.push_back(t);
        evicted
    }

    pub fn oldest (&self)->Option<&T> { self.items.front() }
    pub fn latest (&self)->Option<&T> { self.items.back() }
    pub fn get (&self, idx: usize)->Option<&T> { self.items.get(idx) }

    /// iterate in chronological order (oldest first)
    pub fn iter (&self)->impl Iterator<Item=&T> { self.items.iter() }

    pub fn clear (&mut self) { self.items.clear() }
}

impl<T: Clone> RingBuffer<T> {
    pub fn to_vec (&self)->Vec<T> { self.items.iter().cloned().collect() }
}

impl<T: std::fmt::Debug> std::fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RingBuffer({}/{}) ", self.items.len(), self.capacity)?;
        f.debug_list().entries(self.items.iter()).finish()
    }
}

/// ringbuffers are serialized as plain sequences (oldest first), the capacity is not part of the data
impl<T: Serialize> Serialize for RingBuffer<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        let mut seq = serializer.serialize_seq(Some(self.items.len()))?;
        for e in self.items.iter() {
            seq.serialize_element(e)?;
        }
        seq.end()
    }
}
