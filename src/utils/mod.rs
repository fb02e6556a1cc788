pub mod vector;
pub mod bubblesort;
pub mod selectionsort;
pub mod insertionsort;
pub mod mergesort;
pub mod heapsort;
pub mod radixsort;
pub mod quicksort;

pub use self::bubblesort::bubblesort;
pub use self::selectionsort::selectionsort;
pub use self::insertionsort::insertionsort;
pub use self::mergesort::mergesort;
pub use self::heapsort::heapsort;
pub use self::radixsort::radixsort;
pub use self::quicksort::quicksort;
