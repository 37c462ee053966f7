//! Gene-level genetic operators for timetable schedules.
//!
//! # Encoding
//!
//! A chromosome is a [`Schedule`]: one [`Gene`] per class, in class-id
//! order. Each gene is a `(student, time_slot)` pair drawn from
//! `[0, num_students) × [0, num_time_slots)`. Operators never reorder genes,
//! so position `c` always belongs to class `c`.
//!
//! Infeasible genes (a student placed in a slot they cannot attend) are
//! allowed here and penalized later by fitness; no repair is attempted.

use rand::Rng;

use crate::models::{Gene, ProblemDimensions, Schedule};

/// Draws one gene uniformly from the instance grid.
pub fn random_gene<R: Rng>(dims: &ProblemDimensions, rng: &mut R) -> Gene {
    Gene {
        student: rng.random_range(0..dims.num_students),
        time_slot: rng.random_range(0..dims.num_time_slots),
    }
}

/// Creates a schedule of `num_classes` independent uniform genes.
pub fn random_schedule<R: Rng>(dims: &ProblemDimensions, rng: &mut R) -> Schedule {
    (0..dims.num_classes)
        .map(|_| random_gene(dims, rng))
        .collect::<Vec<_>>()
        .into()
}

// ======================== Crossover operators ========================

/// Single-point crossover at a fixed cut.
///
/// The child takes genes `[0, point)` from `p1` and `[point, len)` from `p2`.
/// A cut past the end yields a copy of `p1`.
pub fn crossover_at(p1: &Schedule, p2: &Schedule, point: usize) -> Schedule {
    let point = point.min(p1.len()).min(p2.len());
    let mut genes = Vec::with_capacity(p2.len());
    genes.extend_from_slice(&p1.genes()[..point]);
    genes.extend_from_slice(&p2.genes()[point..]);
    Schedule::new(genes)
}

/// Single-point crossover with a random cut in `[1, len - 1]`.
///
/// Neither side of the cut is ever empty. Schedules with fewer than two
/// genes have no valid cut and the child is a copy of `p1`.
pub fn single_point_crossover<R: Rng>(p1: &Schedule, p2: &Schedule, rng: &mut R) -> Schedule {
    let len = p1.len().min(p2.len());
    if len < 2 {
        return p1.clone();
    }
    let point = rng.random_range(1..len);
    crossover_at(p1, p2, point)
}

// ======================== Mutation operators ========================

/// Per-gene mutation: each gene is independently replaced by a fresh
/// uniform gene with probability `rate`.
///
/// Operates on the caller's working copy. Returns the number of genes
/// replaced.
pub fn uniform_gene_mutation<R: Rng>(
    schedule: &mut Schedule,
    dims: &ProblemDimensions,
    rate: f64,
    rng: &mut R,
) -> usize {
    let mut replaced = 0;
    for gene in schedule.genes_mut() {
        if rng.random::<f64>() < rate {
            *gene = random_gene(dims, rng);
            replaced += 1;
        }
    }
    replaced
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn dims() -> ProblemDimensions {
        ProblemDimensions::new(8, 5, 6)
    }

    #[test]
    fn test_random_schedule() {
        let mut rng = SmallRng::seed_from_u64(42);
        let s = random_schedule(&dims(), &mut rng);
        assert_eq!(s.len(), 8);
        assert!(s.is_in_range(&dims()));
    }

    #[test]
    fn test_random_genes_cover_grid() {
        let d = ProblemDimensions::new(1, 3, 2);
        let mut rng = SmallRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(random_gene(&d, &mut rng));
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_crossover_at_every_cut() {
        let mut rng = SmallRng::seed_from_u64(42);
        let p1 = random_schedule(&dims(), &mut rng);
        let p2 = random_schedule(&dims(), &mut rng);

        for p in 1..p1.len() {
            let child = crossover_at(&p1, &p2, p);
            assert_eq!(child.len(), p1.len());
            assert_eq!(&child.genes()[..p], &p1.genes()[..p]);
            assert_eq!(&child.genes()[p..], &p2.genes()[p..]);
        }
    }

    #[test]
    fn test_crossover_at_past_end() {
        let mut rng = SmallRng::seed_from_u64(3);
        let p1 = random_schedule(&dims(), &mut rng);
        let p2 = random_schedule(&dims(), &mut rng);
        assert_eq!(crossover_at(&p1, &p2, 100), p1);
    }

    #[test]
    fn test_single_point_crossover_keeps_alignment() {
        let mut rng = SmallRng::seed_from_u64(42);
        let p1 = random_schedule(&dims(), &mut rng);
        let p2 = random_schedule(&dims(), &mut rng);

        for _ in 0..100 {
            let child = single_point_crossover(&p1, &p2, &mut rng);
            assert_eq!(child.len(), 8);
            // Gene c comes from p1 or p2 at the same position
            for (c, g) in child.genes().iter().enumerate() {
                assert!(*g == p1.genes()[c] || *g == p2.genes()[c]);
            }
            // Cut never degenerates: first gene from p1, last from p2
            assert_eq!(child.genes()[0], p1.genes()[0]);
            assert_eq!(child.genes()[7], p2.genes()[7]);
        }
    }

    #[test]
    fn test_single_gene_crossover_copies_first_parent() {
        let p1 = Schedule::new(vec![Gene::new(0, 0)]);
        let p2 = Schedule::new(vec![Gene::new(1, 1)]);
        let mut rng = SmallRng::seed_from_u64(42);
        assert_eq!(single_point_crossover(&p1, &p2, &mut rng), p1);
    }

    #[test]
    fn test_mutation_rate_zero_is_identity() {
        let mut rng = SmallRng::seed_from_u64(42);
        let original = random_schedule(&dims(), &mut rng);
        let mut s = original.clone();
        for _ in 0..100 {
            assert_eq!(uniform_gene_mutation(&mut s, &dims(), 0.0, &mut rng), 0);
        }
        assert_eq!(s, original);
    }

    #[test]
    fn test_mutation_rate_one_replaces_every_gene() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut s = random_schedule(&dims(), &mut rng);
        let replaced = uniform_gene_mutation(&mut s, &dims(), 1.0, &mut rng);
        assert_eq!(replaced, 8);
        assert!(s.is_in_range(&dims()));
    }

    #[test]
    fn test_mutation_reproducible() {
        let base = random_schedule(&dims(), &mut SmallRng::seed_from_u64(1));
        let mut a = base.clone();
        let mut b = base.clone();
        uniform_gene_mutation(&mut a, &dims(), 1.0, &mut SmallRng::seed_from_u64(5));
        uniform_gene_mutation(&mut b, &dims(), 1.0, &mut SmallRng::seed_from_u64(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_mutation_stays_in_range() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut s = random_schedule(&dims(), &mut rng);
        for _ in 0..200 {
            uniform_gene_mutation(&mut s, &dims(), 0.3, &mut rng);
            assert!(s.is_in_range(&dims()));
        }
    }
}
