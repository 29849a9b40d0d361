use async_graphql_tide::graphql;
use clap::Parser;
use model::{
    password::HashCost,
    schema,
    store::{mem, SharedDataSource},
};
use std::sync::Arc;
use tide::listener::Listener;


/// Start the recipe box server.
#[derive(Clone, Debug, Parser)]
struct Options {
    /// The port where the app should be served.
    #[clap(short, long, env = "RECIPE_BOX_PORT", default_value = "8000")]
    port: u16,

    /// The bcrypt cost factor used when hashing passwords.
    #[clap(long, env = "RECIPE_BOX_HASH_COST", default_value = "10")]
    hash_cost: u32,
}

impl Options {
    /// Serve the GraphQL API until the process is terminated.
    async fn serve(self) -> tide::Result<()> {
        let store: SharedDataSource = Arc::new(mem::Connection::create());
        let schema = schema::executor(store, HashCost(self.hash_cost));

        let mut app = tide::new();
        app.at("/graphql").all(graphql(schema));

        let mut listener = app.bind(format!("0.0.0.0:{}", self.port)).await?;
        for info in listener.info() {
            tracing::info!("server ready at {}/graphql", info.connection());
        }
        listener.accept().await?;
        Ok(())
    }
}

#[async_std::main]
async fn main() -> tide::Result<()> {
    model::init_logging();
    let opt = Options::parse();
    opt.serve().await
}
