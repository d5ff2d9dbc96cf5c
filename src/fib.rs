/// Largest index whose Fibonacci number fits in a `u64`.
pub const MAX_INDEX: u32 = 93;

/// Naive doubly recursive Fibonacci. Runs in time exponential in `n`.
pub fn fib(n: u32) -> u64 {
    if n <= 1 {
        u64::from(n)
    } else {
        fib(n - 1) + fib(n - 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_values() {
        let values: Vec<u64> = (0..12).map(fib).collect();
        assert_eq!(values, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89]);
    }

    #[test]
    fn default_upper_bound() {
        assert_eq!(fib(33), 3_524_578);
    }

    #[test]
    fn max_index_is_last_to_fit() {
        let (mut a, mut b) = (0u64, 1u64);
        let mut n = 0;
        while let Some(next) = a.checked_add(b) {
            a = b;
            b = next;
            n += 1;
        }
        // a = fib(n), b = fib(n + 1), and fib(n + 2) overflowed
        assert_eq!(n + 1, MAX_INDEX);
    }

    #[test]
    fn recurrence_holds() {
        for n in 2..25 {
            assert_eq!(fib(n), fib(n - 1) + fib(n - 2));
        }
    }
}
