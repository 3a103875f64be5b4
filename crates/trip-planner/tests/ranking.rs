//! ranking engine tests

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;
    use trip_planner::error::AttributeFault;
    use trip_planner::{
        build_itinerary, rank, score, Item, PlannerError, RankingEngine, WeightKey, WeightSet, DEFAULT_ITINERARY_SIZE,
    };

    fn dest(id: &str, [culture, nature, food, cost, distance]: [f64; 5]) -> Item {
        Item::new(id, id.to_uppercase())
            .with_attribute("culture", culture)
            .with_attribute("nature", nature)
            .with_attribute("food", food)
            .with_attribute("cost", cost)
            .with_attribute("distance", distance)
    }

    fn four_destinations() -> Vec<Item> {
        vec![
            dest("seoul", [9.0, 3.0, 10.0, 7.0, 2.0]).with_food_type("Korean BBQ"),
            dest("jeju", [6.0, 9.0, 8.0, 6.0, 6.0]).with_food_type("Seafood"),
            dest("kyoto", [10.0, 6.0, 8.0, 8.0, 7.0]).with_food_type("Kaiseki"),
            dest("bangkok", [7.0, 4.0, 9.0, 4.0, 9.0]).with_food_type("Street Food"),
        ]
    }

    #[test]
    fn score_follows_weighted_sum() {
        let w = WeightSet { culture: 2.0, nature: 3.0, food: 4.0, budget: 1.5, distance: 10.0 };
        let item = dest("x", [1.0, 2.0, 3.0, 4.0, 5.0]);
        // 2 + 6 + 12 - 6 - 5
        assert_eq!(score(&item, &w).unwrap(), 9.0);
    }

    #[test]
    fn distance_weight_is_scaled_by_a_tenth() {
        let w = WeightSet { culture: 0.0, nature: 0.0, food: 0.0, budget: 0.0, distance: 10.0 };
        let item = dest("far", [0.0, 0.0, 0.0, 0.0, 10.0]);
        assert_eq!(score(&item, &w).unwrap(), -10.0);
    }

    #[test]
    fn identical_attributes_score_identically() {
        let w = WeightSet { culture: 7.0, nature: 1.0, food: 9.5, budget: 3.0, distance: 4.0 };
        let a = dest("a", [4.0, 8.0, 2.0, 6.0, 3.0]);
        let b = dest("b", [4.0, 8.0, 2.0, 6.0, 3.0]);
        assert_eq!(score(&a, &w).unwrap(), score(&b, &w).unwrap());
    }

    #[test]
    fn missing_attribute_is_reported_by_name() {
        let item = Item::new("d9", "Nowhere")
            .with_attribute("culture", 1.0)
            .with_attribute("nature", 1.0)
            .with_attribute("cost", 1.0)
            .with_attribute("distance", 1.0);
        match score(&item, &WeightSet::default()) {
            Err(PlannerError::InvalidItem { id, key, fault }) => {
                assert_eq!(id, "d9");
                assert_eq!(key, "food");
                assert_eq!(fault, AttributeFault::Missing);
            }
            other => panic!("expected InvalidItem, got {other:?}"),
        }
    }

    #[test]
    fn non_finite_attribute_is_rejected() {
        let item = dest("nan", [f64::NAN, 1.0, 1.0, 1.0, 1.0]);
        let err = score(&item, &WeightSet::default()).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidItem { fault: AttributeFault::NotFinite, .. }));
    }

    #[test]
    fn non_finite_weight_is_rejected() {
        let w = WeightSet { budget: f64::INFINITY, ..WeightSet::default() };
        let err = score(&dest("x", [1.0; 5]), &w).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidWeight { ref key, .. } if key == "budget"));
    }

    #[test]
    fn weight_set_edits_reject_non_finite_values() {
        let mut w = WeightSet::default();
        w.set(WeightKey::Food, 8.0).unwrap();
        assert_eq!(w.get(WeightKey::Food), 8.0);
        assert!(w.set(WeightKey::Distance, f64::NAN).is_err());
        assert_eq!(w.distance, 5.0);
    }

    #[test]
    fn clamped_weights_stay_within_slider_range() {
        let w = WeightSet { culture: 0.0, nature: 42.0, ..WeightSet::default() }.clamped();
        assert_eq!((w.culture, w.nature, w.food), (1.0, 10.0, 5.0));
    }

    #[test]
    fn rank_is_a_descending_permutation() {
        let items = four_destinations();
        let ranked = rank(&items, &WeightSet::default()).unwrap();

        assert_eq!(ranked.len(), items.len());
        let mut ids: Vec<&str> = ranked.iter().map(|s| s.item.id()).collect();
        ids.sort_unstable();
        let mut expected: Vec<&str> = items.iter().map(|i| i.id()).collect();
        expected.sort_unstable();
        assert_eq!(ids, expected);

        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn rank_keeps_input_order_for_ties() {
        let items = vec![
            dest("first", [1.0, 1.0, 1.0, 0.0, 0.0]),
            dest("winner", [9.0, 9.0, 9.0, 0.0, 0.0]),
            dest("second", [1.0, 1.0, 1.0, 0.0, 0.0]),
            dest("third", [3.0, 0.0, 0.0, 0.0, 0.0]),
        ];
        let ranked = rank(&items, &WeightSet::default()).unwrap();
        let ids: Vec<&str> = ranked.iter().map(|s| s.item.id()).collect();
        assert_eq!(ids, ["winner", "first", "second", "third"]);
    }

    #[test]
    fn rank_treats_signed_zero_scores_as_ties() {
        let w = WeightSet { culture: -1.0, nature: -1.0, food: -1.0, budget: 1.0, distance: 1.0 };
        // a scores -0.0, b scores +0.0
        let items = vec![dest("a", [0.0; 5]), dest("b", [1.0, 0.0, 0.0, -1.0, 0.0])];
        let ranked = rank(&items, &w).unwrap();
        assert_eq!(ranked[0].score, ranked[1].score);
        let ids: Vec<&str> = ranked.iter().map(|s| s.item.id()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn rank_leaves_input_untouched() {
        let items = four_destinations();
        let before = items.clone();
        let _ = rank(&items, &WeightSet::default()).unwrap();
        assert_eq!(items, before);
    }

    #[test]
    fn itinerary_picks_top_three_in_score_order() {
        let items = four_destinations();
        let itinerary = build_itinerary(&items, &WeightSet::default(), DEFAULT_ITINERARY_SIZE).unwrap();

        let picked: Vec<(usize, &str, f64)> =
            itinerary.days.iter().map(|d| (d.day, d.item_id.as_str(), d.score)).collect();
        assert_eq!(picked, [(1, "jeju", 82.0), (2, "kyoto", 76.5), (3, "bangkok", 75.5)]);

        assert_eq!(
            itinerary.days[0].activities,
            ["Explore JEJU highlights".to_string(), "Try local Seafood".to_string()]
        );
    }

    #[test]
    fn itinerary_is_bounded_by_item_count() {
        let items = four_destinations();
        let size = NonZeroUsize::new(10).unwrap();
        let itinerary = build_itinerary(&items, &WeightSet::default(), size).unwrap();
        assert_eq!(itinerary.len(), 4);
        assert_eq!(itinerary.days.last().map(|d| d.day), Some(4));
    }

    #[test]
    fn empty_items_give_empty_itinerary() {
        let itinerary = build_itinerary(&[], &WeightSet::default(), DEFAULT_ITINERARY_SIZE).unwrap();
        assert!(itinerary.is_empty());
    }

    #[test]
    fn missing_food_type_uses_placeholder() {
        let items = vec![dest("plain", [1.0, 1.0, 1.0, 1.0, 1.0])];
        let itinerary = build_itinerary(&items, &WeightSet::default(), DEFAULT_ITINERARY_SIZE).unwrap();
        assert_eq!(itinerary.days[0].activities[1], "Try local cuisine");

        let engine = RankingEngine { food_placeholder: "street snacks".into(), ..RankingEngine::default() };
        let itinerary = engine.itinerary(&items).unwrap();
        assert_eq!(itinerary.days[0].activities[1], "Try local street snacks");
    }

    #[test]
    fn itinerary_regeneration_is_idempotent() {
        let items = four_destinations();
        let engine = RankingEngine::default();
        assert_eq!(engine.itinerary(&items).unwrap(), engine.itinerary(&items).unwrap());
    }

    #[test]
    fn summary_lines_render_days() {
        let itinerary = RankingEngine::default().itinerary(&four_destinations()).unwrap();
        assert_eq!(
            itinerary.summary_lines()[0],
            "Day 1 — JEJU: Explore JEJU highlights · Try local Seafood"
        );
    }
}
