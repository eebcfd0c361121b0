// Primality module
// Trial division up to the integer square root, in loop and recursive form
//
// Numan Thabit 2025 Nov

/// Deepest recursion `is_prime_recursive` will attempt. Covers every
/// candidate whose integer square root is at most this value.
pub const MAX_RECURSION_DEPTH: u64 = 4_096;

/// Trial division by every integer in `2..=isqrt(number)`.
///
/// Checks `d * d > number` before `number % d == 0` on each step, the same
/// order as the recursive form. The square is taken in 128 bits so the loop
/// terminates for every `i64` without overflow.
pub fn is_prime(number: i64) -> bool {
    if number <= 1 {
        return false;
    }
    let n = number as i128;
    let mut divisor: i128 = 2;
    loop {
        if divisor * divisor > n {
            return true;
        }
        if n % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
}

/// Recursive trial division. Returns `None` when the answer would need more
/// than [`MAX_RECURSION_DEPTH`] frames.
pub fn is_prime_recursive(number: i64) -> Option<bool> {
    if number <= 1 {
        return Some(false);
    }
    if required_depth(number) > MAX_RECURSION_DEPTH {
        return None;
    }
    Some(recurse(number as i128, 2))
}

fn recurse(number: i128, divisor: i128) -> bool {
    if divisor * divisor > number {
        return true;
    }
    if number % divisor == 0 {
        return false;
    }
    recurse(number, divisor + 1)
}

/// Worst-case frame count: one per divisor in `2..=isqrt(number)` plus the
/// terminating frame.
fn required_depth(number: i64) -> u64 {
    integer_sqrt(number as u64).max(1)
}

fn integer_sqrt(n: u64) -> u64 {
    let mut root = (n as f64).sqrt() as u64;
    while (root as u128) * (root as u128) > n as u128 {
        root -= 1;
    }
    while ((root + 1) as u128) * ((root + 1) as u128) <= n as u128 {
        root += 1;
    }
    root
}
