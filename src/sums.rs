//! Three ways to sum the integers `1..=n`.
//!
//! All three agree for any `n` where `n * (n + 1)` fits in a `u64`
//! (roughly `n <= 6_074_000_999`); the recursive variant is additionally
//! bounded by stack depth and is only practical for small `n`.

/// Closed-form sum: `n * (n + 1) / 2`.
pub fn sum_to_n_formula(n: u64) -> u64 {
    n * (n + 1) / 2
}

/// Iterative sum over `1..=n`.
pub fn sum_to_n_iterative(n: u64) -> u64 {
    let mut sum = 0;
    for i in 1..=n {
        sum += i;
    }
    sum
}

/// Recursive sum. Practical only for small `n`.
pub fn sum_to_n_recursive(n: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    n + sum_to_n_recursive(n - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        for f in [sum_to_n_formula, sum_to_n_iterative, sum_to_n_recursive] {
            assert_eq!(f(0), 0);
            assert_eq!(f(1), 1);
            assert_eq!(f(5), 15);
            assert_eq!(f(100), 5050);
        }
    }

    #[test]
    fn test_implementations_agree() {
        for n in 0..200 {
            let expected = sum_to_n_formula(n);
            assert_eq!(sum_to_n_iterative(n), expected);
            assert_eq!(sum_to_n_recursive(n), expected);
        }
    }

    #[test]
    fn test_large_n_formula_and_iterative() {
        assert_eq!(sum_to_n_formula(1_000_000), 500_000_500_000);
        assert_eq!(sum_to_n_iterative(1_000_000), 500_000_500_000);
    }
}
