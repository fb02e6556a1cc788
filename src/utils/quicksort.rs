use std::mem;

/// Lomuto partition around the last element.
///
/// Everything strictly less than the pivot ends up before it. Returns the
/// pivot's final index. `myslice` must not be empty.
pub fn partition<T, F: Fn(&T, &T) -> bool>(myslice: &mut [T], less: &F) -> usize {
    let high = myslice.len() - 1;
    let mut i = 0;
    for j in 0 .. high {
        if less(&myslice[j], &myslice[high]) {
            myslice.swap(i, j);
            i += 1;
        }
    }

    myslice.swap(i, high);
    i
}

// The pivot is always the last element, so sorted input degrades to O(n^2).
pub fn quicksort<T, F: Fn(&T, &T) -> bool>(myslice: &mut [T], less: F) {
    actual_quicksort(myslice, &less);
}

fn actual_quicksort<T, F: Fn(&T, &T) -> bool>(mut myslice: &mut [T], less: &F) {
    // Recurse into the smaller side, loop on the larger one: depth stays O(log n).
    while myslice.len() > 1 {
        let pivot = partition(myslice, less);
        let (left, right) = mem::take(&mut myslice).split_at_mut(pivot);
        let right = &mut right[1 ..];
        if left.len() < right.len() {
            actual_quicksort(left, less);
            myslice = right;
        } else {
            actual_quicksort(right, less);
            myslice = left;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{must_sorted, XorShift};

    #[test]
    fn odd_elements() {
        let mut v = vec![3,2,1];
        quicksort(&mut v, |x, y| x < y);
        assert_eq!(v, vec![1,2,3]);
    }

    #[test]
    fn even_elements() {
        let mut v = vec![4,3,1,1];
        quicksort(&mut v, |x, y| x < y);
        assert_eq!(v, vec![1,1,3,4]);
    }

    #[test]
    fn single_element() {
        let mut v = vec![4];
        quicksort(&mut v, |x, y| x < y);
        assert_eq!(v, vec![4]);
    }

    #[test]
    fn two_element() {
        let mut v = vec![4,2];
        quicksort(&mut v, |x, y| x < y);
        assert_eq!(v, vec![2, 4]);
    }

    #[test]
    fn equal_elements_with_pivot_duplicate() {
        let mut v = vec![4, 4, 2, 1, 1, 8, 9, 10];
        quicksort(&mut v, |x, y| x < y);
        assert_eq!(v, vec![1, 1, 2, 4, 4, 8, 9, 10]);
    }

    #[test]
    fn negatives_and_duplicates() {
        let mut v = vec![5, -3, 0, 5, 2];
        quicksort(&mut v, |x, y| x < y);
        assert_eq!(v, vec![-3, 0, 2, 5, 5]);
    }

    #[test]
    fn partition_places_pivot() {
        let mut v = vec![7, 2, 9, 1, 5];
        let p = partition(&mut v, &|a: &i32, b: &i32| a < b);
        assert_eq!(p, 2);
        assert_eq!(v[p], 5);
        assert!(v[.. p].iter().all(|x| *x < 5));
        assert!(v[p + 1 ..].iter().all(|x| *x >= 5));
    }

    #[test]
    fn already_sorted_large() {
        let mut v: Vec<i32> = (0 .. 5_000).collect();
        quicksort(&mut v, |x, y| x < y);
        must_sorted(&v);
    }

    fn quicksort_random_set(count: usize) -> Vec<i32> {
        let mut ret = XorShift::new(count as u32).signed_array(count, 1_000_000);
        quicksort(&mut ret, |x, y| x < y);
        ret
    }

    #[test]
    fn random_5000() {
        must_sorted(&quicksort_random_set(5000));
    }

    #[test]
    fn random_1000() {
        must_sorted(&quicksort_random_set(1000));
    }

    #[test]
    fn random_100() {
        must_sorted(&quicksort_random_set(100));
    }
}
