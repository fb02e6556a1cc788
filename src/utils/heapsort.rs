use super::vector::sink;

pub fn heapsort<T, F: Fn(&T, &T) -> bool>(data: &mut [T], less: F) {
    let len = data.len();
    for i in (0 .. len / 2).rev() {
        sink(data, i, &less);
    }

    for i in (1 .. len).rev() {
        data.swap(0, i);
        sink(&mut data[.. i], 0, &less);
    }
}
