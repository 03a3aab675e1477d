/// Spaces on either side of a run of dashes in an aligned row.
pub const BOUNDING_SPACES_COUNT: usize = 2;

/// Fewest dashes drawn between a label and its value.
pub const MIN_DASHES_COUNT: usize = 2;

pub fn count_digits(mut n: u64) -> usize {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
