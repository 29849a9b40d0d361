//! Interface to the backend data store consumed by the GraphQL model.
//!
//! The entrypoint to this module is [`DataSource`], which describes the
//! operations the GraphQL layer needs from the persistence layer: one
//! create/find pair per entity, list accessors, and the two
//! relationship-navigation accessors bridging [`User`]s and [`Recipe`]s. The
//! resolvers interact with storage exclusively through this trait, so tests
//! and alternative backends can substitute their own implementation.

pub mod mem;

use crate::schema::{Link, LinkInput, Recipe, RecipeInput, User, UserInput};
use async_trait::async_trait;
use snafu::Snafu;
use std::sync::Arc;

/// Errors reported by a data store.
#[derive(Clone, Debug, Snafu)]
pub enum Error {
    /// A referenced row does not exist.
    #[snafu(display("no {kind} with id {id}"))]
    NotFound { kind: &'static str, id: i32 },
}

/// A source of data which can be served by the GraphQL API.
///
/// Missing rows are not errors for the `find_*` lookups, which return `None`;
/// [`Error`] is reserved for constraint failures, like a [`Recipe`] referring
/// to a [`User`] that does not exist.
#[async_trait]
pub trait DataSource: Send + Sync + 'static {
    /// Insert a new user and return it with its assigned id.
    async fn create_user(&self, input: UserInput) -> Result<User, Error>;

    /// Look up a user by primary key.
    async fn find_user(&self, id: i32) -> Result<Option<User>, Error>;

    /// Insert a new recipe and return it with its assigned id.
    ///
    /// Fails if `input.user_id` does not refer to an existing user.
    async fn create_recipe(&self, input: RecipeInput) -> Result<Recipe, Error>;

    /// Look up a recipe by primary key.
    async fn find_recipe(&self, id: i32) -> Result<Option<Recipe>, Error>;

    /// List every recipe in the store.
    async fn all_recipes(&self) -> Result<Vec<Recipe>, Error>;

    /// Insert a new link and return it with its assigned id.
    async fn create_link(&self, input: LinkInput) -> Result<Link, Error>;

    /// Look up a link by primary key.
    async fn find_link(&self, id: i32) -> Result<Option<Link>, Error>;

    /// List every link in the store.
    async fn all_links(&self) -> Result<Vec<Link>, Error>;

    /// Relationship navigation: the recipes owned by the given user.
    async fn user_recipes(&self, user_id: i32) -> Result<Vec<Recipe>, Error>;

    /// Relationship navigation: the owner of the given recipe.
    async fn recipe_user(&self, recipe_id: i32) -> Result<User, Error>;
}

/// A shared handle to a data store, as attached to the GraphQL context.
pub type SharedDataSource = Arc<dyn DataSource>;
