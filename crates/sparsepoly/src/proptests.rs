//! Property-based tests for term store arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::store::TermStore;
    use crate::term::Power;

    // Strategy for generating small coefficients, zero included
    fn small_coeff() -> impl Strategy<Value = i64> {
        -20i64..20i64
    }

    // Strategy for generating sparse polynomials over x (up to 6 writes)
    fn small_poly() -> impl Strategy<Value = TermStore<i64>> {
        proptest::collection::vec((small_coeff(), 0u64..12), 0..=6)
            .prop_map(|terms| TermStore::from_terms('x', terms))
    }

    fn is_well_formed(p: &TermStore<i64>) -> bool {
        let descending = p.terms().windows(2).all(|w| w[0].power() > w[1].power());
        let nonzero = p.iter().all(|t| *t.coefficient() != 0);
        descending && nonzero
    }

    proptest! {
        // Store invariants

        #[test]
        fn store_invariants_hold(
            writes in proptest::collection::vec((small_coeff(), 0u64..16), 0..32)
        ) {
            let mut p = TermStore::new();
            for (c, power) in writes {
                p.set_coefficient(c, power);
                prop_assert!(is_well_formed(&p));
            }
        }

        #[test]
        fn last_write_wins(
            writes in proptest::collection::vec((small_coeff(), 0u64..8), 0..24),
            probe in 0u64..8
        ) {
            let expected = writes
                .iter()
                .rev()
                .find(|(_, power)| *power == probe)
                .map_or(0, |(c, _)| *c);
            let p = TermStore::from_terms('x', writes);
            prop_assert_eq!(p.coefficient(probe), expected);
        }

        #[test]
        fn degree_is_leading_power(p in small_poly()) {
            let max: Option<Power> = p.iter().map(|t| t.power()).max();
            prop_assert_eq!(p.degree(), max);
        }

        #[test]
        fn negative_power_leaves_store(p in small_poly(), c in small_coeff(), power in -50i64..0) {
            let mut q = p.clone();
            prop_assert!(q.change_coefficient(c, power).is_err());
            prop_assert_eq!(q, p);
        }

        // Arithmetic laws

        #[test]
        fn add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn add_identity(a in small_poly()) {
            let zero = TermStore::new();
            prop_assert_eq!(a.add(&zero), a.clone());
            prop_assert_eq!(zero.add(&a), a);
        }

        #[test]
        fn add_matches_coefficients(a in small_poly(), b in small_poly()) {
            let sum = a.add(&b);
            prop_assert!(is_well_formed(&sum));
            for power in 0..12 {
                prop_assert_eq!(sum.coefficient(power), a.coefficient(power) + b.coefficient(power));
            }
        }

        #[test]
        fn mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.multiply(&b), b.multiply(&a));
        }

        #[test]
        fn mul_well_formed(a in small_poly(), b in small_poly()) {
            prop_assert!(is_well_formed(&a.multiply(&b)));
        }

        #[test]
        fn distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.multiply(&b.add(&c));
            let right = a.multiply(&b).add(&a.multiply(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn mul_degree(a in small_poly(), b in small_poly()) {
            // Integers have no zero divisors, so degrees add.
            let product = a.multiply(&b);
            match (a.degree(), b.degree()) {
                (Some(m), Some(n)) => {
                    prop_assert_eq!(product.degree(), Some(m + n));
                }
                _ => {
                    prop_assert!(product.is_empty());
                }
            }
        }

        // Evaluation homomorphism

        #[test]
        fn eval_add(a in small_poly(), b in small_poly(), x in -3i64..3) {
            prop_assert_eq!(a.add(&b).evaluate(&x), a.evaluate(&x) + b.evaluate(&x));
        }

        #[test]
        fn eval_mul(a in small_poly(), b in small_poly(), x in -3i64..3) {
            prop_assert_eq!(a.multiply(&b).evaluate(&x), a.evaluate(&x) * b.evaluate(&x));
        }

        #[test]
        fn eval_scale(a in small_poly(), s in small_coeff(), x in -3i64..3) {
            prop_assert_eq!(a.scalar_multiply(&s).evaluate(&x), a.evaluate(&x) * s);
        }
    }
}
