use argon2::Params;
use serde::Deserialize;

/// Work factor applied to newly created password hashes.
///
/// Maps onto the Argon2id `m`, `t` and `p` parameters. The defaults are the
/// Argon2 recommended set (19 MiB, 2 passes, 1 lane).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct HashingCost {
    /// Memory size in KiB
    pub memory_kib: u32,

    /// Number of passes over memory
    pub iterations: u32,

    /// Degree of parallelism (lanes)
    pub parallelism: u32,
}

impl HashingCost {
    /// How far a stored hash may exceed the larger of the configured and
    /// default cost before verification refuses to run it.
    pub const CEILING_FACTOR: u32 = 4;
    /// Cheapest parameter set Argon2 accepts. Only suitable for tests.
    pub const MINIMAL: HashingCost = HashingCost {
        memory_kib: Params::MIN_M_COST,
        iterations: Params::MIN_T_COST,
        parallelism: Params::MIN_P_COST,
    };

    /// Highest cost a stored hash may declare and still be verified.
    ///
    /// Scaled from the larger of `self` and the default, so a cheap test
    /// configuration still verifies hashes made under production settings.
    pub fn ceiling(&self) -> HashingCost {
        let floor = HashingCost::default();

        HashingCost {
            memory_kib: self
                .memory_kib
                .max(floor.memory_kib)
                .saturating_mul(Self::CEILING_FACTOR),
            iterations: self
                .iterations
                .max(floor.iterations)
                .saturating_mul(Self::CEILING_FACTOR),
            parallelism: self
                .parallelism
                .max(floor.parallelism)
                .saturating_mul(Self::CEILING_FACTOR),
        }
    }

    /// True when any parameter is above the matching one in `limit`.
    pub fn exceeds(&self, limit: &HashingCost) -> bool {
        self.memory_kib > limit.memory_kib
            || self.iterations > limit.iterations
            || self.parallelism > limit.parallelism
    }
}

impl Default for HashingCost {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_argon2_recommendation() {
        let cost = HashingCost::default();
        assert_eq!(cost.memory_kib, 19 * 1024);
        assert_eq!(cost.iterations, 2);
        assert_eq!(cost.parallelism, 1);
    }

    #[test]
    fn test_ceiling_scales_from_default_floor() {
        let ceiling = HashingCost::MINIMAL.ceiling();

        assert_eq!(ceiling.memory_kib, 4 * 19 * 1024);
        assert_eq!(ceiling.iterations, 8);
        assert_eq!(ceiling.parallelism, 4);
    }

    #[test]
    fn test_ceiling_scales_from_configured_cost() {
        let cost = HashingCost {
            memory_kib: 64 * 1024,
            iterations: 3,
            parallelism: 2,
        };

        assert_eq!(
            cost.ceiling(),
            HashingCost {
                memory_kib: 256 * 1024,
                iterations: 12,
                parallelism: 8,
            }
        );
    }

    #[test]
    fn test_exceeds() {
        let limit = HashingCost::default();

        assert!(!HashingCost::MINIMAL.exceeds(&limit));
        assert!(!limit.exceeds(&limit));
        assert!(HashingCost {
            memory_kib: limit.memory_kib + 1,
            ..limit
        }
        .exceeds(&limit));
        assert!(HashingCost {
            iterations: limit.iterations + 1,
            ..limit
        }
        .exceeds(&limit));
    }

    #[test]
    fn test_minimal_is_accepted_by_argon2() {
        let cost = HashingCost::MINIMAL;
        assert!(Params::new(cost.memory_kib, cost.iterations, cost.parallelism, None).is_ok());
    }
}
