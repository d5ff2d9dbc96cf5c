//! Generates the doubling prime table used to size hash map buckets, and
//! times a naive recursive Fibonacci.

pub mod fib;
pub mod logging;
pub mod primes;
pub mod render;
