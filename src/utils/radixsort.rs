const RADIX: usize = 10;

fn digit(value: i32, exp: i64) -> usize {
    (value as i64 / exp % RADIX as i64) as usize
}

/// One stable counting pass keyed on the decimal digit selected by `exp`.
fn count_pass(arr: &mut [i32], aux: &mut [i32], exp: i64) {
    let mut count = [0usize; RADIX];
    arr.iter().for_each(|x| count[digit(*x, exp)] += 1);
    (1 .. RADIX).for_each(|i| count[i] += count[i - 1]); // end index of each bucket

    arr.iter().rev().for_each(|x| {
        let d = digit(*x, exp);
        count[d] -= 1;
        aux[count[d]] = *x;
    });

    arr.copy_from_slice(aux);
}

/// LSD radix sort, base 10.
///
/// Only non-negative values are supported: digit extraction has no meaning
/// for negatives, so callers validate before sorting.
pub fn radixsort(arr: &mut [i32]) {
    debug_assert!(arr.iter().all(|x| *x >= 0), "radixsort got a negative value");
    let max = match arr.iter().max() {
        Some(&max) => max as i64,
        None => return,
    };

    let mut aux = vec![0; arr.len()];
    let mut exp = 1i64;
    while max / exp > 0 {
        count_pass(arr, &mut aux, exp);
        exp *= RADIX as i64;
    }
}
