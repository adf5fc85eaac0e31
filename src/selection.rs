use log::debug;

/// Sorts the slice ascending by repeatedly swapping the minimum of the
/// unsorted suffix into the next sorted position. One swap per pass,
/// O(n²) comparisons, O(1) extra space. Not stable.
pub fn selection_sort<T: Ord>(arr: &mut [T]) {
    if arr.len() <= 1 {
        return;
    }
    debug!("selection sort: n={}", arr.len());
    for i in 0..arr.len() - 1 {
        let mut min_index = i;
        for j in i + 1..arr.len() {
            if arr[j] < arr[min_index] {
                min_index = j;
            }
        }
        if min_index != i {
            arr.swap(i, min_index);
        }
    }
}
