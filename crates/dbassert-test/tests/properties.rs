//! Property tests against the in-memory backend

use dbassert_query::{MemoryConnection, attributes};
use dbassert_test::DatabaseAssertions;
use proptest::prelude::*;
use proptest::sample::Index;
use serde_json::json;

fn seeded(titles: &[String]) -> MemoryConnection {
	let connection = MemoryConnection::new();
	for (id, title) in titles.iter().enumerate() {
		connection
			.insert("products", json!({"id": id, "title": title}))
			.unwrap();
	}
	connection
}

proptest! {
	#[test]
	fn see_succeeds_for_any_stored_row(
		titles in prop::collection::vec("[a-z]{1,8}", 1..8),
		pick in any::<Index>(),
	) {
		let title = pick.get(&titles).clone();
		let db = DatabaseAssertions::new(seeded(&titles));
		let stored = attributes! { "title" => title };

		prop_assert!(db.see_in_database("products", &stored).is_ok());
		prop_assert!(db.dont_see_in_database("products", &stored).is_err());
	}

	#[test]
	fn absent_rows_are_not_seen(titles in prop::collection::vec("[a-z]{1,8}", 0..8)) {
		// Stored titles are lowercase only
		let absent = attributes! { "title" => "NOT-STORED" };
		let db = DatabaseAssertions::new(seeded(&titles));

		prop_assert!(db.dont_see_in_database("products", &absent).is_ok());
		prop_assert!(db.see_in_database("products", &absent).is_err());
	}

	#[test]
	fn outcomes_are_repeatable(
		titles in prop::collection::vec("[a-c]{1,2}", 0..10),
		wanted in "[a-c]{1,2}",
		sample_size in 1usize..5,
	) {
		let connection = seeded(&titles);
		let before = connection.rows("products");
		let db = DatabaseAssertions::new(connection.clone()).with_sample_size(sample_size);
		let attributes = attributes! { "title" => wanted };

		let first = db.see_in_database("products", &attributes).map_err(|e| e.to_string());
		let second = db.see_in_database("products", &attributes).map_err(|e| e.to_string());
		prop_assert_eq!(first, second);

		let first = db.dont_see_in_database("products", &attributes).map_err(|e| e.to_string());
		let second = db.dont_see_in_database("products", &attributes).map_err(|e| e.to_string());
		prop_assert_eq!(first, second);

		prop_assert_eq!(connection.rows("products"), before);
	}

	#[test]
	fn report_never_shows_more_than_sample_size(
		count in 1usize..12,
		sample_size in 1usize..5,
	) {
		let titles = vec!["spark".to_string(); count];
		let db = DatabaseAssertions::new(seeded(&titles)).with_sample_size(sample_size);

		let message = db
			.dont_see_in_database("products", &attributes! { "title" => "spark" })
			.unwrap_err()
			.to_string();

		let shown = message.matches("\"title\": \"spark\"").count();
		prop_assert_eq!(shown, count.min(sample_size));
		if count > sample_size {
			let suffix = format!(" and {} others.", count - sample_size);
			prop_assert!(message.ends_with(&suffix));
		} else {
			prop_assert!(!message.contains("others."));
		}
	}
}
