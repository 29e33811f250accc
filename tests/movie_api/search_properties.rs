//! Generated-graph properties of search and listing.

use std::collections::HashSet;

use moviegraph::PropertyGraph;
use proptest::prelude::*;

use crate::test_utils::*;

fn arb_titles() -> impl Strategy<Value = Vec<Option<String>>> {
    proptest::collection::vec(proptest::option::weighted(0.9, "[a-cA-C ]{1,6}"), 0..16)
}

fn build(titles: &[Option<String>]) -> PropertyGraph {
    let mut g = PropertyGraph::new();
    for t in titles {
        add_movie(&mut g, t.as_deref(), None, None);
    }
    g
}

fn block_on<F: std::future::Future>(f: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(f)
}

proptest! {
    #[test]
    fn search_results_contain_fragment_in_title_order(
        titles in arb_titles(),
        fragment in "[a-cA-C]{1,2}",
    ) {
        let svc = moviegraph::in_memory(build(&titles));
        let found = block_on(svc.search(Some(&fragment))).unwrap();
        let needle = fragment.to_lowercase();

        for m in &found {
            let title = m.title.as_deref().unwrap();
            prop_assert!(title.to_lowercase().contains(&needle));
        }
        for pair in found.windows(2) {
            prop_assert!(pair[0].title <= pair[1].title);
        }

        let expected = titles
            .iter()
            .flatten()
            .filter(|t| t.to_lowercase().contains(&needle))
            .count();
        prop_assert_eq!(found.len(), expected);
    }

    #[test]
    fn list_all_is_a_superset_of_search(
        titles in arb_titles(),
        fragment in "[a-c]{1,2}",
    ) {
        let svc = moviegraph::in_memory(build(&titles));
        let all: HashSet<_> = ids_of(&block_on(svc.list_all()).unwrap()).into_iter().collect();
        let found = block_on(svc.search(Some(&fragment))).unwrap();
        prop_assert_eq!(all.len(), titles.len());
        for id in ids_of(&found) {
            prop_assert!(all.contains(&id));
        }
    }
}
