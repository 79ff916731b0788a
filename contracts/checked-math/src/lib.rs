#![no_std]
use soroban_sdk::{contract, contractimpl, Env};

/// Checked Math example contract demonstrating flag-based overflow handling.
///
/// Soroban builds run with overflow checks enabled, so plain `+` and `-`
/// trap on overflow. This contract shows the alternative style where the
/// functions stay total: each operation returns the result paired with an
/// `overflowed` flag, and the caller decides how to react. On overflow or
/// underflow the value component is 0 and the flag is true.
///
/// # Contract Functions
///
/// - `add(a, b)` - Guarded addition over `u128`
/// - `sub(a, b)` - Guarded subtraction over `u128`
#[contract]
pub struct CheckedMath;

#[contractimpl]
impl CheckedMath {
    /// Add two unsigned integers, signalling overflow instead of trapping.
    ///
    /// Returns `(a + b, false)` when the sum is representable, `(0, true)`
    /// when `b` exceeds `u128::MAX - a`.
    pub fn add(_env: Env, a: u128, b: u128) -> (u128, bool) {
        if b > u128::MAX - a {
            (0, true)
        } else {
            (a + b, false)
        }
    }

    /// Subtract `b` from `a`, signalling underflow instead of trapping.
    ///
    /// Returns `(a - b, false)` when `b <= a`, `(0, true)` otherwise.
    pub fn sub(_env: Env, a: u128, b: u128) -> (u128, bool) {
        if b > a {
            (0, true)
        } else {
            (a - b, false)
        }
    }
}
