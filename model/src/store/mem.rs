//! In-memory instantiation of the [`DataSource`](super::DataSource) interface.
//!
//! Rows live in plain vectors behind an async read-write lock, with ids
//! assigned from per-table counters. Besides backing the server process, a
//! fresh connection makes a convenient fixture for testing the GraphQL layer
//! in isolation from any real database.

use super::{DataSource, Error, NotFoundSnafu};
use crate::schema::{Link, LinkInput, Recipe, RecipeInput, User, UserInput};
use async_std::sync::{Arc, RwLock};
use async_trait::async_trait;
use snafu::{ensure, OptionExt};

/// The in-memory database.
#[derive(Debug, Default)]
struct Db {
    users: Table<User>,
    recipes: Table<Recipe>,
    links: Table<Link>,
}

/// An in-memory table: rows plus the id to assign on the next insert.
#[derive(Debug)]
struct Table<T> {
    rows: Vec<T>,
    next_id: i32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: vec![],
            next_id: 1,
        }
    }
}

impl<T: Clone> Table<T> {
    /// Assign the next id and append the row built from it.
    fn insert(&mut self, build: impl FnOnce(i32) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.push(row.clone());
        row
    }
}

/// A connection to the in-memory database.
#[derive(Clone, Debug)]
pub struct Connection(Arc<RwLock<Db>>);

impl Connection {
    /// Create a new database and connect to it.
    ///
    /// This will create a connection to a fresh, empty database, unrelated to
    /// any previous connection or database. Once the database is created, this
    /// connection can be [cloned](Clone) in order to create multiple
    /// simultaneous handles to the same database.
    pub fn create() -> Self {
        Self(Default::default())
    }
}

#[async_trait]
impl DataSource for Connection {
    async fn create_user(&self, input: UserInput) -> Result<User, Error> {
        let mut db = self.0.write().await;
        let user = db.users.insert(|id| User {
            id,
            name: input.name,
            email: input.email,
            password_hash: input.password_hash,
        });
        tracing::debug!("created user {}", user.id);
        Ok(user)
    }

    async fn find_user(&self, id: i32) -> Result<Option<User>, Error> {
        let db = self.0.read().await;
        Ok(db.users.rows.iter().find(|user| user.id == id).cloned())
    }

    async fn create_recipe(&self, input: RecipeInput) -> Result<Recipe, Error> {
        let mut db = self.0.write().await;
        ensure!(
            db.users.rows.iter().any(|user| user.id == input.user_id),
            NotFoundSnafu {
                kind: "user",
                id: input.user_id,
            }
        );
        let recipe = db.recipes.insert(|id| Recipe {
            id,
            title: input.title,
            ingredients: input.ingredients,
            direction: input.direction,
            user_id: input.user_id,
        });
        tracing::debug!("created recipe {} for user {}", recipe.id, recipe.user_id);
        Ok(recipe)
    }

    async fn find_recipe(&self, id: i32) -> Result<Option<Recipe>, Error> {
        let db = self.0.read().await;
        Ok(db
            .recipes
            .rows
            .iter()
            .find(|recipe| recipe.id == id)
            .cloned())
    }

    async fn all_recipes(&self) -> Result<Vec<Recipe>, Error> {
        Ok(self.0.read().await.recipes.rows.clone())
    }

    async fn create_link(&self, input: LinkInput) -> Result<Link, Error> {
        let mut db = self.0.write().await;
        let link = db.links.insert(|id| Link {
            id,
            url: input.url,
            slug: input.slug,
        });
        tracing::debug!("created link {}", link.id);
        Ok(link)
    }

    async fn find_link(&self, id: i32) -> Result<Option<Link>, Error> {
        let db = self.0.read().await;
        Ok(db.links.rows.iter().find(|link| link.id == id).cloned())
    }

    async fn all_links(&self) -> Result<Vec<Link>, Error> {
        Ok(self.0.read().await.links.rows.clone())
    }

    async fn user_recipes(&self, user_id: i32) -> Result<Vec<Recipe>, Error> {
        let db = self.0.read().await;
        Ok(db
            .recipes
            .rows
            .iter()
            .filter(|recipe| recipe.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn recipe_user(&self, recipe_id: i32) -> Result<User, Error> {
        let db = self.0.read().await;
        let recipe = db
            .recipes
            .rows
            .iter()
            .find(|recipe| recipe.id == recipe_id)
            .context(NotFoundSnafu {
                kind: "recipe",
                id: recipe_id,
            })?;
        db.users
            .rows
            .iter()
            .find(|user| user.id == recipe.user_id)
            .cloned()
            .context(NotFoundSnafu {
                kind: "user",
                id: recipe.user_id,
            })
    }
}
