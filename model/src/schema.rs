//! The schema describing the entities and operations in the GraphQL API.
//!
//! Three object types are exposed: [`User`], [`Recipe`], and [`Link`]. Users
//! own recipes (one-to-many); links stand alone. The [`Query`] and
//! [`Mutation`] roots delegate each field to a single call on the shared
//! [`DataSource`](crate::store::DataSource) handle carried in the request
//! context. Relationship fields are resolved lazily, only when a query
//! actually selects them.

use crate::password::{self, HashCost};
use crate::store::SharedDataSource;
use async_graphql::{
    ComplexObject, Context, EmptySubscription, Object, Result, Schema, SimpleObject,
};
use serde::{Deserialize, Serialize};

/// Someone who shares recipes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
#[graphql(complex)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// The salted hash of the user's password.
    ///
    /// Deliberately not a GraphQL field: no query path may reach it.
    #[graphql(skip)]
    pub password_hash: String,
}

#[ComplexObject]
impl User {
    /// The recipes owned by this user.
    async fn recipes(&self, ctx: &Context<'_>) -> Result<Vec<Recipe>> {
        let store = ctx.data::<SharedDataSource>()?;
        Ok(store.user_recipes(self.id).await?)
    }
}

/// A recipe belonging to a single [`User`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
#[graphql(complex)]
pub struct Recipe {
    pub id: i32,
    /// A short name for the dish.
    pub title: String,
    /// Freeform ingredient text, not structured as a list.
    pub ingredients: String,
    /// Freeform preparation instructions.
    pub direction: String,
    /// The id of the owning user, exposed through the `user` field instead.
    #[graphql(skip)]
    pub user_id: i32,
}

#[ComplexObject]
impl Recipe {
    /// The user who owns this recipe.
    async fn user(&self, ctx: &Context<'_>) -> Result<User> {
        let store = ctx.data::<SharedDataSource>()?;
        Ok(store.recipe_user(self.id).await?)
    }
}

/// A bookmarked URL with a short slug. Unrelated to users and recipes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
pub struct Link {
    pub id: i32,
    pub url: String,
    pub slug: String,
}

/// Fields for inserting a new [`User`].
///
/// `password_hash` must already be hashed; the store never sees a plaintext
/// password.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserInput {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Fields for inserting a new [`Recipe`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecipeInput {
    pub user_id: i32,
    pub title: String,
    pub ingredients: String,
    pub direction: String,
}

/// Fields for inserting a new [`Link`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LinkInput {
    pub url: String,
    pub slug: String,
}

/// Entrypoint for read-only GraphQL queries.
#[derive(Clone, Copy, Debug)]
pub struct Query;

#[Object]
impl Query {
    /// Look up a single user by id.
    async fn user(&self, ctx: &Context<'_>, id: i32) -> Result<Option<User>> {
        Ok(ctx.data::<SharedDataSource>()?.find_user(id).await?)
    }

    /// List every recipe.
    async fn all_recipes(&self, ctx: &Context<'_>) -> Result<Vec<Recipe>> {
        Ok(ctx.data::<SharedDataSource>()?.all_recipes().await?)
    }

    /// Look up a single recipe by id.
    async fn recipe(&self, ctx: &Context<'_>, id: i32) -> Result<Option<Recipe>> {
        Ok(ctx.data::<SharedDataSource>()?.find_recipe(id).await?)
    }

    /// List every link.
    async fn all_links(&self, ctx: &Context<'_>) -> Result<Vec<Link>> {
        Ok(ctx.data::<SharedDataSource>()?.all_links().await?)
    }

    /// Look up a single link by id.
    async fn link(&self, ctx: &Context<'_>, id: i32) -> Result<Option<Link>> {
        Ok(ctx.data::<SharedDataSource>()?.find_link(id).await?)
    }
}

/// Entrypoint for GraphQL mutations.
///
/// Records are append-only: there are no update or delete operations.
#[derive(Clone, Copy, Debug)]
pub struct Mutation;

#[Object]
impl Mutation {
    /// Create a user, hashing the password before it is stored.
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        name: String,
        email: String,
        password: String,
    ) -> Result<User> {
        let store = ctx.data::<SharedDataSource>()?;
        let cost = *ctx.data::<HashCost>()?;
        let password_hash = password::hash(&password, cost)?;
        Ok(store
            .create_user(UserInput {
                name,
                email,
                password_hash,
            })
            .await?)
    }

    /// Create a recipe owned by the user with id `user_id`.
    async fn create_recipe(
        &self,
        ctx: &Context<'_>,
        user_id: i32,
        title: String,
        ingredients: String,
        direction: String,
    ) -> Result<Recipe> {
        let store = ctx.data::<SharedDataSource>()?;
        Ok(store
            .create_recipe(RecipeInput {
                user_id,
                title,
                ingredients,
                direction,
            })
            .await?)
    }

    /// Create a link.
    async fn create_link(&self, ctx: &Context<'_>, url: String, slug: String) -> Result<Link> {
        let store = ctx.data::<SharedDataSource>()?;
        Ok(store.create_link(LinkInput { url, slug }).await?)
    }
}

/// The executable schema served by the server process.
pub type RecipeBoxSchema = Schema<Query, Mutation, EmptySubscription>;

/// Compile the schema and resolvers into an executable schema.
///
/// The store handle and hash cost are attached as context data once, here, and
/// shared by every resolver invocation for the life of the process.
pub fn executor(store: SharedDataSource, cost: HashCost) -> RecipeBoxSchema {
    Schema::build(Query, Mutation, EmptySubscription)
        .data(store)
        .data(cost)
        .finish()
}
