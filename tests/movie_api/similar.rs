//! Similar movies.

use moviegraph::PropertyGraph;

use crate::test_utils::*;

#[tokio::test]
async fn similar_unions_genre_and_cast_paths() {
    let svc = fixture_service();
    let similar = svc.similar(ids::HEAT).await.unwrap();
    // Crime/Thriller: Collateral, Godfather, Irishman, Ronin.
    // Pacino/De Niro: Insider, Godfather, Irishman, Ronin, Taxi Driver.
    assert_eq!(
        ids_of(&similar),
        vec![
            ids::THE_GODFATHER, // 9.2
            ids::THE_INSIDER,   // 7.8
            ids::THE_IRISHMAN,  // 7.8
            ids::COLLATERAL,    // 7.5
            ids::RONIN,         // 7.2
            ids::TAXI_DRIVER,   // no rating
        ]
    );
}

#[tokio::test]
async fn similar_never_includes_the_base_movie() {
    let svc = fixture_service();
    for id in [ids::HEAT, ids::ALIEN, ids::THE_IRISHMAN] {
        let similar = svc.similar(id).await.unwrap();
        assert!(!ids_of(&similar).contains(&id));
    }
}

#[tokio::test]
async fn isolated_movie_has_no_similar_movies() {
    let svc = fixture_service();
    assert!(svc.similar(ids::ARRIVAL).await.unwrap().is_empty());
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let svc = fixture_service();
    assert_eq!(svc.similar(-1).await.unwrap_err().kind(), "not_found");
}

#[tokio::test]
async fn rated_movie_outranks_unrated_regardless_of_path() {
    // A (8.0, Drama); B (9.0, Drama, no shared cast); C shares an actor with
    // A and has no rating.
    let mut g = PropertyGraph::new();
    let a = add_movie(&mut g, Some("A"), None, Some(8.0));
    let b = add_movie(&mut g, Some("B"), None, Some(9.0));
    let c = add_movie(&mut g, Some("C"), None, None);
    let drama = g.add_node(&["Genre"], [("name", moviegraph::Value::from("Drama"))]);
    let actor = g.add_node(&["Person"], [("name", moviegraph::Value::from("Sam"))]);
    g.add_relationship(a, "IN_GENRE", drama).unwrap();
    g.add_relationship(b, "IN_GENRE", drama).unwrap();
    g.add_relationship(actor, "ACTED_IN", a).unwrap();
    g.add_relationship(actor, "ACTED_IN", c).unwrap();

    let svc = moviegraph::in_memory(g);
    assert_eq!(ids_of(&svc.similar(a).await.unwrap()), vec![b, c]);
}
