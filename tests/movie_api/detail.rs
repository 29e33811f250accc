//! Movie detail.

use moviegraph::Error;

use crate::test_utils::*;

#[tokio::test]
async fn detail_collects_cast_directors_and_genres() {
    let svc = fixture_service();
    let d = svc.detail(ids::HEAT).await.unwrap();
    assert_eq!(d.movie.id(), Some(ids::HEAT));
    assert_eq!(d.movie.get("title").unwrap(), "Heat");
    assert_eq!(d.movie.get("year").unwrap(), 1995);

    let mut actors: Vec<_> = d.actors.iter().filter_map(|a| a.id()).collect();
    actors.sort();
    assert_eq!(actors, vec![ids::AL_PACINO, 21]);
    assert_eq!(d.directors.len(), 1);
    assert_eq!(d.directors[0].id(), Some(ids::MICHAEL_MANN));
    assert_eq!(d.genres.len(), 2);
    assert!(d.genres.iter().any(|g| g.id() == Some(ids::CRIME)));
}

#[tokio::test]
async fn related_nodes_carry_properties_and_labels() {
    let svc = fixture_service();
    let d = svc.detail(ids::HEAT).await.unwrap();
    let pacino = d
        .actors
        .iter()
        .find(|a| a.id() == Some(ids::AL_PACINO))
        .unwrap();
    assert_eq!(pacino.get("name").unwrap(), "Al Pacino");
    assert_eq!(pacino.get("born").unwrap(), 1940);
    assert_eq!(pacino.get("labels").unwrap(), &serde_json::json!(["Person"]));
}

#[tokio::test]
async fn movie_without_genres_has_empty_genre_list() {
    let svc = fixture_service();
    let d = svc.detail(ids::ARRIVAL).await.unwrap();
    assert!(d.genres.is_empty());
    assert_eq!(d.actors.len(), 1);
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let svc = fixture_service();
    let err = svc.detail(12_345).await.unwrap_err();
    assert_eq!(err, Error::NotFound { movie_id: 12_345 });
}

#[tokio::test]
async fn non_movie_id_is_not_found() {
    let svc = fixture_service();
    let err = svc.detail(ids::AL_PACINO).await.unwrap_err();
    assert_eq!(err.kind(), "not_found");
}
