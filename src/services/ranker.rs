//! Final ordering of classified places.

use crate::constants::MAX_RESULTS_PER_CATEGORY;
use crate::models::{ClassifiedPlace, PlaceCategory};
use serde::Serialize;

/// The two ranked partitions, each capped at
/// [`MAX_RESULTS_PER_CATEGORY`] entries.
#[derive(Debug, Clone, Serialize)]
pub struct RankedSuggestions {
    pub activities: Vec<ClassifiedPlace>,
    pub food: Vec<ClassifiedPlace>,
}

/// Partition places by category and sort each partition by crowd level:
/// ascending when the user wants calm, descending otherwise. The sort is
/// stable, so ties keep their input order.
pub fn rank(places: Vec<ClassifiedPlace>, wants_calm: bool) -> RankedSuggestions {
    let (food, activities): (Vec<_>, Vec<_>) = places
        .into_iter()
        .partition(|p| p.category == PlaceCategory::Food);

    RankedSuggestions {
        activities: sort_and_cap(activities, wants_calm),
        food: sort_and_cap(food, wants_calm),
    }
}

fn sort_and_cap(mut places: Vec<ClassifiedPlace>, wants_calm: bool) -> Vec<ClassifiedPlace> {
    places.sort_by(|a, b| {
        if wants_calm {
            a.crowd_level.cmp(&b.crowd_level)
        } else {
            b.crowd_level.cmp(&a.crowd_level)
        }
    });
    places.truncate(MAX_RESULTS_PER_CATEGORY);
    places
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(name: &str, crowd_level: u8) -> ClassifiedPlace {
        ClassifiedPlace {
            name: name.to_string(),
            latitude: 0.0,
            longitude: 0.0,
            place_type: "Park".to_string(),
            experience: "Relaxing nature walk 🌿".to_string(),
            category: PlaceCategory::Activity,
            explanation: String::new(),
            crowd_level,
            address: None,
        }
    }

    fn food(name: &str, crowd_level: u8) -> ClassifiedPlace {
        ClassifiedPlace {
            place_type: "Restaurant".to_string(),
            category: PlaceCategory::Food,
            ..activity(name, crowd_level)
        }
    }

    #[test]
    fn calm_sorts_ascending_lively_descending() {
        let places = vec![activity("a", 4), activity("b", 1), activity("c", 3)];

        let calm = rank(places.clone(), true);
        let levels: Vec<u8> = calm.activities.iter().map(|p| p.crowd_level).collect();
        assert_eq!(levels, vec![1, 3, 4]);

        let lively = rank(places, false);
        let levels: Vec<u8> = lively.activities.iter().map(|p| p.crowd_level).collect();
        assert_eq!(levels, vec![4, 3, 1]);
    }

    #[test]
    fn ties_preserve_input_order() {
        let places = vec![
            activity("first", 2),
            activity("second", 2),
            activity("third", 1),
            activity("fourth", 2),
        ];
        let ranked = rank(places, true);
        let names: Vec<&str> = ranked.activities.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["third", "first", "second", "fourth"]);
    }

    #[test]
    fn partitions_by_category() {
        let places = vec![
            food("diner", 2),
            activity("park", 1),
            food("cafe", 1),
            activity("museum", 3),
        ];
        let ranked = rank(places, true);
        assert_eq!(ranked.activities.len(), 2);
        assert_eq!(ranked.food.len(), 2);
        assert!(ranked
            .food
            .iter()
            .all(|p| p.category == PlaceCategory::Food));
    }

    #[test]
    fn each_partition_is_capped_at_ten() {
        let places: Vec<ClassifiedPlace> = (0..25)
            .map(|i| activity(&format!("a{}", i), (i % 5 + 1) as u8))
            .chain((0..12).map(|i| food(&format!("f{}", i), (i % 5 + 1) as u8)))
            .collect();
        let ranked = rank(places, false);
        assert_eq!(ranked.activities.len(), 10);
        assert_eq!(ranked.food.len(), 10);
    }

    #[test]
    fn monotonic_ordering_holds_for_adjacent_pairs() {
        let places: Vec<ClassifiedPlace> = [3u8, 1, 5, 2, 4, 2, 5, 1]
            .iter()
            .map(|&c| activity("p", c))
            .collect();

        let calm = rank(places.clone(), true);
        for pair in calm.activities.windows(2) {
            assert!(pair[0].crowd_level <= pair[1].crowd_level);
        }

        let lively = rank(places, false);
        for pair in lively.activities.windows(2) {
            assert!(pair[0].crowd_level >= pair[1].crowd_level);
        }
    }
}
