use log::debug;

/// One adjacent-pair sweep over `arr[0..=upper]`, returns the number of
/// swaps performed. Zero swaps means the range is already sorted.
fn sweep<T: Ord>(arr: &mut [T], upper: usize) -> usize {
    let mut swaps = 0;
    for j in 0..upper {
        if arr[j] > arr[j + 1] {
            arr.swap(j, j + 1);
            swaps += 1;
        }
    }
    swaps
}

/// Sorts the slice ascending with adjacent-pair sweeps. Each pass bubbles
/// the largest remaining element to the end, shrinking the unsorted
/// prefix by one. A pass without swaps terminates the sort early, so
/// already sorted input costs a single O(n) pass.
pub fn bubble_sort<T: Ord>(arr: &mut [T]) {
    let n = arr.len();
    if n <= 1 {
        return;
    }
    for i in 0..n - 1 {
        if sweep(arr, n - i - 1) == 0 {
            debug!("bubble sort: early exit after {} of {} passes", i + 1, n - 1);
            return;
        }
    }
}
