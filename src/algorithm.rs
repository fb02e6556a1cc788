use std::fmt;

use crate::error::InvalidInput;
use crate::utils;

/// The fixed set of benchmarked sorting routines, in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Heap,
    Radix,
    Quick,
}

impl Algorithm {
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Heap,
        Algorithm::Radix,
        Algorithm::Quick,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Heap => "Heap Sort",
            Algorithm::Radix => "Radix Sort",
            Algorithm::Quick => "Quick Sort",
        }
    }

    /// Sorts `data` ascending in place. `data` must have passed `validate`.
    pub fn sort(self, data: &mut [i32]) {
        let less = |a: &i32, b: &i32| a < b;
        match self {
            Algorithm::Bubble => utils::bubblesort(data, less),
            Algorithm::Selection => utils::selectionsort(data, less),
            Algorithm::Insertion => utils::insertionsort(data, less),
            Algorithm::Merge => utils::mergesort(data, less),
            Algorithm::Heap => utils::heapsort(data, less),
            Algorithm::Radix => utils::radixsort(data),
            Algorithm::Quick => utils::quicksort(data, less),
        }
    }

    pub fn validate(self, data: &[i32]) -> Result<(), InvalidInput> {
        if data.is_empty() {
            return Err(InvalidInput::Empty);
        }

        if let Algorithm::Radix = self {
            if let Some(&value) = data.iter().find(|x| **x < 0) {
                return Err(InvalidInput::Negative { algorithm: self, value });
            }
        }

        Ok(())
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
