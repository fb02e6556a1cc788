/// Restores the max-heap property below `pos` by sinking the element down.
///
/// `heap` is the whole heap; children of `i` live at `2i + 1` and `2i + 2`.
///
/// # Examples
///
/// ```ignore
/// let mut heap = vec![1, 9, 8, 7];
/// sink(&mut heap, 0, &|a: &i32, b: &i32| a < b);
/// assert_eq!(heap, vec![9, 7, 8, 1]);
/// ```
pub fn sink<T, F>(heap: &mut [T], mut pos: usize, less: &F)
where
    F: Fn(&T, &T) -> bool,
{
    let len = heap.len();
    loop {
        let left = 2 * pos + 1;
        let right = left + 1;
        let mut largest = pos;

        if left < len && less(&heap[largest], &heap[left]) {
            largest = left;
        }

        if right < len && less(&heap[largest], &heap[right]) {
            largest = right;
        }

        if largest == pos {
            return;
        }

        heap.swap(pos, largest);
        pos = largest;
    }
}
