// src/domain/stats.rs

use crate::domain::property::{Property, PropertyType};
use serde::Serialize;
use std::collections::HashMap;

/// Running aggregate for one city, as shown on the cities page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityStats {
    pub city: String,
    pub count: u32,
    pub total: i64,
    /// `round(total / count)`, recomputed after every update.
    pub average: i64,
    pub min: i64,
    pub max: i64,
    /// Most frequent type in the city; ties go to the type seen first.
    pub popular_type: PropertyType,
}

struct CityAcc {
    city: String,
    count: u32,
    total: i64,
    average: i64,
    min: i64,
    max: i64,
    // (type, occurrences) in first-encountered order, for the tie-break.
    type_counts: Vec<(PropertyType, u32)>,
}

// Round-half-up integer division. Prices are positive, so no sign handling.
fn rounded_average(total: i64, count: i64) -> i64 {
    (total + count / 2) / count
}

/// One-pass reduction of a listing sequence into per-city aggregates,
/// sorted for presentation: descending count, then descending average,
/// remaining ties in first-seen order.
pub fn city_stats<'a>(listings: impl IntoIterator<Item = &'a Property>) -> Vec<CityStats> {
    let mut groups: Vec<CityAcc> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for p in listings {
        let i = match index.get(&p.city) {
            Some(&i) => i,
            None => {
                index.insert(p.city.clone(), groups.len());
                groups.push(CityAcc {
                    city: p.city.clone(),
                    count: 0,
                    total: 0,
                    average: 0,
                    min: p.price,
                    max: p.price,
                    type_counts: Vec::new(),
                });
                groups.len() - 1
            }
        };

        let g = &mut groups[i];
        g.count += 1;
        g.total += p.price;
        g.average = rounded_average(g.total, g.count as i64);
        g.min = g.min.min(p.price);
        g.max = g.max.max(p.price);
        match g.type_counts.iter_mut().find(|(t, _)| *t == p.property_type) {
            Some((_, n)) => *n += 1,
            None => g.type_counts.push((p.property_type, 1)),
        }
    }

    let mut stats: Vec<CityStats> = groups
        .into_iter()
        .map(|g| {
            // Strict `>` keeps the first-encountered type on a tie.
            let mut best = g.type_counts[0];
            for &(t, n) in &g.type_counts[1..] {
                if n > best.1 {
                    best = (t, n);
                }
            }
            CityStats {
                city: g.city,
                count: g.count,
                total: g.total,
                average: g.average,
                min: g.min,
                max: g.max,
                popular_type: best.0,
            }
        })
        .collect();

    // Stable sort, so cities tied on both keys keep input order.
    stats.sort_by(|a, b| b.count.cmp(&a.count).then(b.average.cmp(&a.average)));
    stats
}
