//! Stateless statistics over plant collections
//!
//! Every function takes any iterable of plant references, so they work on a
//! single garden, a flattened network, or an ad-hoc slice.

use crate::domain::{Garden, PlantTraits};

/// Arithmetic mean of plant heights; 0.0 for an empty sequence.
pub fn average_height<'a, P, I>(plants: I) -> f64
where
    P: PlantTraits + 'a,
    I: IntoIterator<Item = &'a P>,
{
    let (count, sum) = plants
        .into_iter()
        .fold((0usize, 0u64), |(count, sum), p| {
            (count + 1, sum + u64::from(p.height()))
        });
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

/// Tallest plant; ties go to the first occurrence. `None` for an empty sequence.
pub fn tallest_plant<'a, P, I>(plants: I) -> Option<&'a P>
where
    P: PlantTraits + 'a,
    I: IntoIterator<Item = &'a P>,
{
    plants
        .into_iter()
        .reduce(|best, p| if p.height() > best.height() { p } else { best })
}

/// Number of flowering-capable plants currently blooming.
pub fn count_blooming<'a, P, I>(plants: I) -> usize
where
    P: PlantTraits + 'a,
    I: IntoIterator<Item = &'a P>,
{
    plants
        .into_iter()
        .filter(|p| p.is_blooming() == Some(true))
        .count()
}

/// Sum of prize points over prize-capable plants.
pub fn total_prize_points<'a, P, I>(plants: I) -> u64
where
    P: PlantTraits + 'a,
    I: IntoIterator<Item = &'a P>,
{
    plants
        .into_iter()
        .filter_map(|p| p.prize_points())
        .map(u64::from)
        .sum()
}

/// Number of plants across all gardens.
pub fn total_plants<'a, I>(gardens: I) -> usize
where
    I: IntoIterator<Item = &'a Garden>,
{
    gardens.into_iter().map(Garden::len).sum()
}

/// Mean of per-garden summed heights, counting only non-empty gardens.
pub fn average_garden_height<'a, I>(gardens: I) -> f64
where
    I: IntoIterator<Item = &'a Garden>,
{
    let totals: Vec<u64> = gardens
        .into_iter()
        .filter(|g| !g.is_empty())
        .map(Garden::total_height)
        .collect();
    if totals.is_empty() {
        0.0
    } else {
        totals.iter().sum::<u64>() as f64 / totals.len() as f64
    }
}
