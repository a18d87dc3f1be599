use lendfinder_core::Store;

/// Default number of stores returned by a search.
pub const DEFAULT_MAX_RESULTS: usize = 20;

/// Orders by rating, best first, breaking ties by review count, then keeps
/// the first `max_results`. The sort is stable.
#[must_use]
pub fn rank_and_truncate(mut stores: Vec<Store>, max_results: usize) -> Vec<Store> {
    stores.sort_by(|a, b| {
        b.rating
            .total_cmp(&a.rating)
            .then_with(|| b.review_count.cmp(&a.review_count))
    });
    stores.truncate(max_results);
    stores
}

#[cfg(test)]
mod tests {
    use super::*;
    use lendfinder_core::Coordinates;
    use std::collections::BTreeMap;

    fn rated(id: usize, rating: f64, review_count: u64) -> Store {
        Store {
            id: format!("store-{id}"),
            name: format!("Store {id}"),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            phone: String::new(),
            coordinates: Coordinates::default(),
            services: vec!["Financial Services".to_string()],
            hours: BTreeMap::new(),
            rating,
            review_count,
            website: String::new(),
            place_id: String::new(),
            url: String::new(),
        }
    }

    #[test]
    fn truncates_twenty_five_to_twenty_in_rank_order() {
        let stores: Vec<Store> = (0..25u32)
            .map(|i| rated(i as usize, f64::from(i % 5), u64::from(i * 7 % 11)))
            .collect();

        let ranked = rank_and_truncate(stores, DEFAULT_MAX_RESULTS);
        assert_eq!(ranked.len(), 20);
        for pair in ranked.windows(2) {
            assert!(pair[0].rating >= pair[1].rating);
            if pair[0].rating == pair[1].rating {
                assert!(pair[0].review_count >= pair[1].review_count);
            }
        }
    }

    #[test]
    fn fewer_stores_than_limit_are_all_kept() {
        let ranked = rank_and_truncate(vec![rated(1, 3.0, 1), rated(2, 4.5, 0)], 20);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].id, "store-2");
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let ranked = rank_and_truncate(
            vec![rated(1, 4.0, 10), rated(2, 4.0, 10), rated(3, 4.0, 12)],
            20,
        );
        let ids: Vec<&str> = ranked.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["store-3", "store-1", "store-2"]);
    }
}
