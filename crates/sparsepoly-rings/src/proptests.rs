//! Property-based tests for coefficient exponentiation.

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;
    use proptest::prelude::*;

    use crate::traits::pow;

    // Strategy for generating small bases
    fn small_base() -> impl Strategy<Value = i64> {
        -6i64..=6i64
    }

    proptest! {
        #[test]
        fn pow_matches_repeated_multiplication(b in small_base(), e in 0u64..20) {
            let mut expected = 1i64;
            for _ in 0..e {
                expected *= b;
            }
            prop_assert_eq!(pow(&b, e), expected);
        }

        #[test]
        fn pow_adds_exponents(b in small_base(), m in 0u64..12, n in 0u64..12) {
            let b = BigInt::from(b);
            prop_assert_eq!(pow(&b, m) * pow(&b, n), pow(&b, m + n));
        }

        #[test]
        fn pow_multiplies_bases(a in small_base(), b in small_base(), e in 0u64..10) {
            let a = BigInt::from(a);
            let b = BigInt::from(b);
            prop_assert_eq!(pow(&(a.clone() * b.clone()), e), pow(&a, e) * pow(&b, e));
        }
    }
}
