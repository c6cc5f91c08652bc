//! Macro-generated test suite for `Repository<Anime>` contract validation.
//!
//! The `repository_tests!` macro generates a test module validating any
//! `Repository<Anime>` implementation: CRUD, name and predicate lookups,
//! id allocation and concurrent access.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod repository_harness;
//!
//! use repository_harness::*;
//! use catalog::storage::InMemoryRepository;
//!
//! repository_tests!(InMemoryRepository::<Anime>::new());
//! ```
//!
//! `$factory` must evaluate to an empty repository. It is re-evaluated for
//! each test. For the concurrency test the repository must also be
//! `Clone + 'static` with clones sharing state.

#[macro_export]
macro_rules! repository_tests {
    ($factory:expr) => {
        mod repository_contract_tests {
            use super::*;
            use catalog::core::Entity;
            use catalog::core::repository::Repository;
            use catalog::entities::Anime;

            // ==================================================================
            // Save & Find
            // ==================================================================

            #[tokio::test]
            async fn test_save_and_find_by_id() {
                let repo = $factory;
                let saved = repo.save(anime(1, "Naruto")).await.unwrap();
                assert_eq!(saved.id(), 1);

                let found = repo.find_by_id(1).await.unwrap().unwrap();
                assert_eq!(found, saved);
            }

            #[tokio::test]
            async fn test_find_by_id_missing() {
                let repo = $factory;
                assert!(repo.find_by_id(404).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_find_all_empty() {
                let repo = $factory;
                assert_count(&repo.find_all().await.unwrap(), 0);
            }

            #[tokio::test]
            async fn test_find_all_keeps_insertion_order() {
                let repo = $factory;
                for id in [3, 1, 2] {
                    repo.save(anime(id, &format!("Anime {:02}", id))).await.unwrap();
                }
                assert_eq!(ids(&repo.find_all().await.unwrap()), vec![3, 1, 2]);
            }

            // ==================================================================
            // Lookups
            // ==================================================================

            #[tokio::test]
            async fn test_find_by_name_ignores_case() {
                let repo = $factory;
                for a in sample_batch(4) {
                    repo.save(a).await.unwrap();
                }

                let found = repo.find_by_name("ANIME 03").await.unwrap();
                assert_eq!(ids(&found), vec![3]);
            }

            #[tokio::test]
            async fn test_find_by_name_is_exact() {
                let repo = $factory;
                for a in sample_batch(4) {
                    repo.save(a).await.unwrap();
                }
                assert_count(&repo.find_by_name("Anime").await.unwrap(), 0);
            }

            #[tokio::test]
            async fn test_find_by_empty_name_returns_nothing() {
                let repo = $factory;
                for a in sample_batch(2) {
                    repo.save(a).await.unwrap();
                }
                assert_count(&repo.find_by_name("").await.unwrap(), 0);
            }

            #[tokio::test]
            async fn test_find_by_predicate() {
                let repo = $factory;
                for a in sample_batch(5) {
                    repo.save(a).await.unwrap();
                }

                let even = repo.find_by(&|a: &Anime| a.id % 2 == 0).await.unwrap();
                assert_eq!(ids(&even), vec![2, 4]);

                let none = repo.find_by(&|_: &Anime| false).await.unwrap();
                assert_count(&none, 0);
            }

            // ==================================================================
            // Delete
            // ==================================================================

            #[tokio::test]
            async fn test_delete_existing() {
                let repo = $factory;
                for a in sample_batch(3) {
                    repo.save(a).await.unwrap();
                }

                let target = repo.find_by_id(2).await.unwrap().unwrap();
                repo.delete(&target).await.unwrap();

                assert!(repo.find_by_id(2).await.unwrap().is_none());
                assert_eq!(ids(&repo.find_all().await.unwrap()), vec![1, 3]);
            }

            #[tokio::test]
            async fn test_delete_missing_is_noop() {
                let repo = $factory;
                repo.save(anime(1, "Naruto")).await.unwrap();
                repo.delete(&anime(9, "Ghost")).await.unwrap();
                assert_count(&repo.find_all().await.unwrap(), 1);
            }

            // ==================================================================
            // Update
            // ==================================================================

            #[tokio::test]
            async fn test_update_replaces_record() {
                let repo = $factory;
                repo.save(anime_created_days_ago(1, "Naruto", 3)).await.unwrap();

                let replacement = anime(1, "Naruto Shippuden");
                repo.update(replacement.clone()).await.unwrap();

                let found = repo.find_by_id(1).await.unwrap().unwrap();
                assert_eq!(found, replacement);
                assert_count(&repo.find_all().await.unwrap(), 1);
            }

            #[tokio::test]
            async fn test_update_missing_is_not_inserted() {
                let repo = $factory;
                repo.update(anime(7, "Ghost")).await.unwrap();
                assert!(repo.find_by_id(7).await.unwrap().is_none());
            }

            // ==================================================================
            // Id allocation
            // ==================================================================

            #[tokio::test]
            async fn test_next_id_is_increasing() {
                let repo = $factory;
                let first = repo.next_id().await.unwrap();
                let second = repo.next_id().await.unwrap();
                assert!(first >= 1);
                assert!(second > first);
            }

            #[tokio::test]
            async fn test_next_id_skips_saved_ids() {
                let repo = $factory;
                for a in sample_batch(3) {
                    repo.save(a).await.unwrap();
                }
                assert!(repo.next_id().await.unwrap() > 3);
            }

            // ==================================================================
            // Concurrency
            // ==================================================================

            #[tokio::test]
            async fn test_concurrent_saves() {
                let repo = $factory;
                let mut handles = Vec::new();

                for _ in 0..20 {
                    let repo = repo.clone();
                    handles.push(tokio::spawn(async move {
                        let id = repo.next_id().await.unwrap();
                        repo.save(anime(id, &format!("Anime {}", id))).await.unwrap()
                    }));
                }

                for handle in handles {
                    handle.await.unwrap();
                }

                let all = repo.find_all().await.unwrap();
                assert_count(&all, 20);

                let mut unique = ids(&all);
                unique.sort_unstable();
                unique.dedup();
                assert_count(&unique, 20);
            }
        }
    };
}
