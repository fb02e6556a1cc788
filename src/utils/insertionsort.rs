/// Grows a sorted prefix; each new element is moved left past every
/// element greater than it, the larger ones shifting one slot right.
pub fn insertionsort<T, F: Fn(&T, &T) -> bool>(myslice: &mut [T], less: F) {
    let len = myslice.len();
    for i in 1 .. len {
        let mut j = i;
        while j > 0 && less(&myslice[i], &myslice[j - 1]) {
            j -= 1;
        }

        if j < i {
            myslice[j ..= i].rotate_right(1);
        }
    }
}
