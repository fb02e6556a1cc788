pub fn selectionsort<T, F: Fn(&T, &T) -> bool>(myslice: &mut [T], less: F) {
    let len = myslice.len();
    for i in 0 .. len.saturating_sub(1) {
        let mut min = i;
        for j in i + 1 .. len {
            if less(&myslice[j], &myslice[min]) {
                min = j;
            }
        }

        myslice.swap(i, min);
    }
}
