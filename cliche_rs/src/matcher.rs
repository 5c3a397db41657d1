//! Common-prefix scoring between a route and the input arguments.

/// Number of leading positions where `a[i] == b[i]`.
///
/// Stops at the first mismatch or at the end of the shorter slice.
pub fn common_prefix_len<A, B>(a: &[A], b: &[B]) -> usize
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    a.iter()
        .zip(b)
        .take_while(|(x, y)| x.as_ref() == y.as_ref())
        .count()
}
