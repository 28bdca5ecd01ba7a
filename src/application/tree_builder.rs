//! Tree Builder - concurrent recursive assembly of the organization tree.
//!
//! Expanding a node spawns one tokio task per child reference; each task
//! fetches and decodes its organization, appends the new node under the
//! parent's lock, and recursively expands its own children the same way.
//! The nested [`JoinSet`]s act as the in-flight tally: `build` returns
//! only once every transitively spawned task has terminated.
//!
//! The first failure in any branch aborts the remaining in-flight
//! siblings and is returned to the caller; a partially populated tree is
//! never handed out as a success.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use futures::future::BoxFuture;
use futures::FutureExt;
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, info, warn};

use crate::domain::{OrgNode, Organization, OrganizationId};
use crate::ports::{
    Credentials, DecodeError, FetchError, OrganizationDecoder, OrganizationFetcher,
};

/// Errors from a tree build.
///
/// Every variant that originates at an entity names the organization the
/// failure occurred on.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// The fetch for an organization failed.
    #[error("fetch failed for organization {id}: {source}")]
    Fetch {
        /// Organization the fetch was for.
        id: OrganizationId,
        /// Underlying transport failure.
        #[source]
        source: FetchError,
    },

    /// The payload for an organization could not be decoded.
    #[error("decode failed for organization {id}: {source}")]
    Decode {
        /// Organization the payload belonged to.
        id: OrganizationId,
        /// Underlying decode failure.
        #[source]
        source: DecodeError,
    },

    /// An organization id appeared more than once in the reference
    /// closure: a cycle, or a child shared between parents. Either would
    /// otherwise spawn tasks without bound.
    #[error("organization {id} is referenced more than once")]
    RepeatedReference {
        /// The repeated organization.
        id: OrganizationId,
    },

    /// An expansion task panicked or was cancelled out from under the join.
    #[error("expansion task failed: {0}")]
    Join(String),
}

impl BuildError {
    /// Creates a fetch error for an organization.
    pub fn fetch(id: OrganizationId, source: FetchError) -> Self {
        Self::Fetch { id, source }
    }

    /// Creates a decode error for an organization.
    pub fn decode(id: OrganizationId, source: DecodeError) -> Self {
        Self::Decode { id, source }
    }

    /// Creates a repeated-reference error.
    pub fn repeated_reference(id: OrganizationId) -> Self {
        Self::RepeatedReference { id }
    }

    /// Creates a join error from a failed task handle.
    pub fn join(error: JoinError) -> Self {
        Self::Join(error.to_string())
    }

    /// Returns the organization the failure occurred on, if any.
    pub fn organization_id(&self) -> Option<&OrganizationId> {
        match self {
            BuildError::Fetch { id, .. }
            | BuildError::Decode { id, .. }
            | BuildError::RepeatedReference { id } => Some(id),
            BuildError::Join(_) => None,
        }
    }

    /// Returns true when the underlying failure was an authentication
    /// failure against the directory service.
    pub fn is_auth(&self) -> bool {
        matches!(
            self,
            BuildError::Fetch {
                source: FetchError::AuthenticationFailed,
                ..
            }
        )
    }
}

/// Builds the full organization tree reachable from a root id.
///
/// The sole public operation is [`TreeBuilder::build`]; traversal and
/// printing of the result are the caller's business.
pub struct TreeBuilder {
    fetcher: Arc<dyn OrganizationFetcher>,
    decoder: Arc<dyn OrganizationDecoder>,
}

impl TreeBuilder {
    /// Creates a builder over a fetcher and a decoder.
    pub fn new(fetcher: Arc<dyn OrganizationFetcher>, decoder: Arc<dyn OrganizationDecoder>) -> Self {
        Self { fetcher, decoder }
    }

    /// Fetches the root organization and every transitively referenced
    /// sub-organization, returning the fully populated tree.
    ///
    /// One fetch per discovered organization. Returns only after every
    /// spawned expansion task has terminated; the first failure aborts
    /// the remaining in-flight tasks and is returned to the caller.
    pub async fn build(
        &self,
        root_id: &OrganizationId,
        credentials: &Credentials,
    ) -> Result<OrgNode, BuildError> {
        info!(root = %root_id, "building organization tree");

        let ctx = Arc::new(BuildContext {
            fetcher: Arc::clone(&self.fetcher),
            decoder: Arc::clone(&self.decoder),
            credentials: credentials.clone(),
            visited: Mutex::new(HashSet::from([root_id.clone()])),
        });

        let organization = ctx.fetch_organization(root_id).await?;
        let root = NodeCell::new(organization);

        if let Err(error) = expand(Arc::clone(&ctx), Arc::clone(&root)).await {
            warn!(root = %root_id, %error, "organization tree build failed");
            return Err(error);
        }

        let tree = freeze(root);
        info!(root = %root_id, organizations = tree.node_count(), "organization tree complete");
        Ok(tree)
    }
}

/// Shared, read-only state for one build invocation, plus the visited
/// set that turns repeated references into errors instead of unbounded
/// task spawning.
struct BuildContext {
    fetcher: Arc<dyn OrganizationFetcher>,
    decoder: Arc<dyn OrganizationDecoder>,
    credentials: Credentials,
    visited: Mutex<HashSet<OrganizationId>>,
}

impl BuildContext {
    /// Fetches and decodes one organization.
    async fn fetch_organization(&self, id: &OrganizationId) -> Result<Organization, BuildError> {
        let payload = self
            .fetcher
            .fetch(id, &self.credentials)
            .await
            .map_err(|source| BuildError::fetch(id.clone(), source))?;

        debug!(organization = %id, bytes = payload.len(), "fetched organization payload");

        self.decoder
            .decode(&payload)
            .map_err(|source| BuildError::decode(id.clone(), source))
    }

    /// Marks an id as discovered, failing if this build has already seen it.
    fn mark_discovered(&self, id: &OrganizationId) -> Result<(), BuildError> {
        let mut visited = self.visited.lock().unwrap();
        if !visited.insert(id.clone()) {
            return Err(BuildError::repeated_reference(id.clone()));
        }
        Ok(())
    }
}

/// Mutable tree node shared between expansion tasks during a build.
///
/// The mutex guards only the child list and is held only for the push;
/// no lock is ever held across a fetch.
struct NodeCell {
    organization: Organization,
    children: Mutex<Vec<Arc<NodeCell>>>,
}

impl NodeCell {
    fn new(organization: Organization) -> Arc<Self> {
        Arc::new(Self {
            organization,
            children: Mutex::new(Vec::new()),
        })
    }
}

/// Expands one node: one task per child reference, each fetching its
/// organization, appending the new node under the parent's lock, and
/// recursing. Resolves once every task in the subtree has terminated.
fn expand(
    ctx: Arc<BuildContext>,
    parent: Arc<NodeCell>,
) -> BoxFuture<'static, Result<(), BuildError>> {
    async move {
        let mut tasks: JoinSet<Result<(), BuildError>> = JoinSet::new();
        let mut failure: Option<BuildError> = None;

        for child_id in parent.organization.sub_organization_ids.clone() {
            if let Err(error) = ctx.mark_discovered(&child_id) {
                failure = Some(error);
                break;
            }

            let ctx = Arc::clone(&ctx);
            let parent = Arc::clone(&parent);
            tasks.spawn(async move {
                let organization = ctx.fetch_organization(&child_id).await?;
                let child = NodeCell::new(organization);

                // Completion order, not reference order.
                parent.children.lock().unwrap().push(Arc::clone(&child));

                expand(ctx, child).await
            });
        }

        if failure.is_some() {
            tasks.abort_all();
        }

        // Drain every task, aborted or not, so nothing outlives the join.
        while let Some(joined) = tasks.join_next().await {
            let result = joined.unwrap_or_else(|join_error| Err(BuildError::join(join_error)));
            if let Err(error) = result {
                if failure.is_none() {
                    failure = Some(error);
                    tasks.abort_all();
                }
            }
        }

        match failure {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
    .boxed()
}

/// Converts the shared build cells into the plain owned result tree.
///
/// Every expansion task has terminated by the time this runs, so each
/// cell normally has exactly one strong reference left.
fn freeze(cell: Arc<NodeCell>) -> OrgNode {
    let cell = match Arc::try_unwrap(cell) {
        Ok(cell) => cell,
        Err(shared) => NodeCell {
            organization: shared.organization.clone(),
            children: Mutex::new(shared.children.lock().unwrap().clone()),
        },
    };

    let children = cell.children.into_inner().unwrap();
    OrgNode {
        organization: cell.organization,
        children: children.into_iter().map(freeze).collect(),
    }
}
