//! Name-or-ID resolution.

use crate::error::{Result, ServiceError};
use crate::resource::{Collection, Resource};

/// Resolves a user-supplied token to a single resource.
///
/// The token is first tried as an identifier (when the collection accepts
/// it as one). If the service does not know that identifier, the collection
/// is listed and the resources whose name equals the token exactly are
/// selected. Errors from `get` or `list` other than not-found propagate.
pub async fn find_resource<T, C>(collection: &C, token: &str) -> Result<T>
where
    T: Resource + Send,
    C: Collection<T> + ?Sized,
{
    if collection.accepts_id(token) {
        if let Some(found) = collection.get(token).await? {
            return Ok(found);
        }
    }

    let mut matches: Vec<T> = collection
        .list()
        .await?
        .into_iter()
        .filter(|resource| resource.name() == token)
        .collect();

    match matches.len() {
        0 => Err(ServiceError::NotFound {
            kind: T::KIND,
            token: token.to_string(),
        }),
        1 => Ok(matches.remove(0)),
        _ => Err(ServiceError::Ambiguous {
            kind: T::KIND,
            token: token.to_string(),
            ids: matches.iter().map(|r| r.id().to_string()).collect(),
        }),
    }
}
