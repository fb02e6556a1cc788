pub fn bubblesort<T, F: Fn(&T, &T) -> bool>(myslice: &mut [T], less: F) {
    let len = myslice.len();
    for i in 0 .. len.saturating_sub(1) {
        for j in 0 .. len - i - 1 {
            if less(&myslice[j + 1], &myslice[j]) {
                myslice.swap(j, j + 1);
            }
        }
    }
}
