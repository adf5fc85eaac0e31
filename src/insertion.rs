use log::debug;

/// Sorts the slice ascending by moving each element left past strictly
/// greater predecessors to its insertion point. The strict comparison
/// never moves an element past an equal one, so the sort is stable.
/// O(n²) worst case, O(n) on sorted input, O(1) extra space.
pub fn insertion_sort<T: Ord>(arr: &mut [T]) {
    if arr.len() <= 1 {
        return;
    }
    debug!("insertion sort: n={}", arr.len());
    for i in 1..arr.len() {
        let mut j = i;
        while j > 0 && arr[j - 1] > arr[j] {
            arr.swap(j - 1, j);
            j -= 1;
        }
    }
}
