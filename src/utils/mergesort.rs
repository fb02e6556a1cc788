/// Merges the sorted runs `myslice[..mid]` and `myslice[mid..]`.
///
/// Each half is copied into its own buffer; on ties the left run wins, which
/// keeps the sort stable.
pub fn _merge<T: Clone, F: Fn(&T, &T) -> bool>(myslice: &mut [T], mid: usize, less: &F) {
    let mut left = myslice[.. mid].to_vec().into_iter().peekable();
    let mut right = myslice[mid ..].to_vec().into_iter().peekable();

    for slot in myslice.iter_mut() {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => less(r, l),
            (None, _) => true,
            (_, None) => false,
        };

        let next = if take_right { right.next() } else { left.next() };
        if let Some(value) = next {
            *slot = value;
        }
    }
}

pub fn _mergesort<T: Clone, F: Fn(&T, &T) -> bool>(myslice: &mut [T], less: &F) {
    let len = myslice.len();
    if len < 2 {
        return;
    }

    let mid = len / 2;
    _mergesort(&mut myslice[.. mid], less);
    _mergesort(&mut myslice[mid ..], less);
    _merge(myslice, mid, less);
}

pub fn mergesort<T: Clone, F: Fn(&T, &T) -> bool>(myslice: &mut [T], less: F) {
    _mergesort(myslice, &less);
}
