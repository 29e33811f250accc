//! Movie operations on the service surface.

use moviegraph_core::NodeId;

use super::MovieService;
use crate::types::{MovieDetail, MovieSummary};
use crate::{Command, Error, Output, Result};

impl MovieService {
    /// Movies whose title contains `title`, ignoring case, by title.
    ///
    /// `None` or a blank fragment returns an empty list.
    pub async fn search(&self, title: Option<&str>) -> Result<Vec<MovieSummary>> {
        match self
            .executor
            .execute(Command::SearchMovies {
                title: title.map(|s| s.to_string()),
            })
            .await?
        {
            Output::Movies(movies) => Ok(movies),
            _ => Err(Error::Internal {
                reason: "Unexpected output for SearchMovies".into(),
            }),
        }
    }

    /// Every movie, by title.
    pub async fn list_all(&self) -> Result<Vec<MovieSummary>> {
        match self.executor.execute(Command::ListMovies).await? {
            Output::Movies(movies) => Ok(movies),
            _ => Err(Error::Internal {
                reason: "Unexpected output for ListMovies".into(),
            }),
        }
    }

    /// A movie with its actors, directors and genres.
    ///
    /// Fails with [`Error::NotFound`] if no movie has this id.
    pub async fn detail(&self, movie_id: NodeId) -> Result<MovieDetail> {
        match self
            .executor
            .execute(Command::MovieDetail { movie_id })
            .await?
        {
            Output::Detail(detail) => Ok(*detail),
            _ => Err(Error::Internal {
                reason: "Unexpected output for MovieDetail".into(),
            }),
        }
    }

    /// Movies sharing a genre or an actor with the given movie, by rating
    /// then title.
    ///
    /// Fails with [`Error::NotFound`] if no movie has this id.
    pub async fn similar(&self, movie_id: NodeId) -> Result<Vec<MovieSummary>> {
        match self
            .executor
            .execute(Command::SimilarMovies { movie_id })
            .await?
        {
            Output::Movies(movies) => Ok(movies),
            _ => Err(Error::Internal {
                reason: "Unexpected output for SimilarMovies".into(),
            }),
        }
    }
}
