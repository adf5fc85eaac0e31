mod bubble;
mod insertion;
mod selection;

pub use bubble::bubble_sort;
pub use insertion::insertion_sort;
pub use selection::selection_sort;
