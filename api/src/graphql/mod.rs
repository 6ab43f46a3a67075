//! GraphQL surface.
//!
//! The schema is a second transport over the same domain services as the
//! REST routes: identical business rules, reachable through `/graphql`.
//! Authentication context comes from the same bearer-header middleware and
//! is injected per request.

use actix_web::web;
use async_graphql::{Context, EmptySubscription, Object, Schema, ID};
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};

use crate::app::AppState;
use crate::dto::auth::AuthPayload;
use crate::middleware::auth::{AuthContext, MaybeAuth};
use rw_core::domain::entities::rental::{CarId, Rental};

/// The executable schema type
pub type ApiSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// GraphQL view of a rental, mirroring the REST projection
#[derive(async_graphql::SimpleObject)]
#[graphql(name = "Rental")]
pub struct RentalObject {
    pub id: ID,
    pub user_id: ID,
    pub car_id: ID,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: String,
}

impl From<Rental> for RentalObject {
    fn from(rental: Rental) -> Self {
        Self {
            id: ID(rental.id.to_string()),
            user_id: ID(rental.user_id.to_string()),
            car_id: ID(rental.car_id.to_string()),
            start_date: Some(rental.start_date),
            end_date: rental.end_date,
            status: rental.status.as_str().to_string(),
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Trivial liveness probe
    #[graphql(name = "_health")]
    async fn health(&self) -> &'static str {
        "ok"
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Authenticate and issue a bearer token
    async fn login(
        &self,
        ctx: &Context<'_>,
        email: String,
        password: String,
    ) -> async_graphql::Result<AuthPayload> {
        if email.is_empty() || password.is_empty() {
            return Err("Email and password required".into());
        }

        let state = ctx.data_unchecked::<AppState>();
        let user = state
            .users
            .authenticate(&email, &password)
            .await
            .map_err(|_| async_graphql::Error::new("Invalid credentials"))?;

        let token = state
            .tokens
            .issue(user.id, &user.email)
            .map_err(|_| async_graphql::Error::new("Invalid credentials"))?;

        Ok(AuthPayload { token })
    }

    /// Create a rental for the authenticated caller
    async fn rent_car(
        &self,
        ctx: &Context<'_>,
        car_id: ID,
        start_date: Option<String>,
        end_date: Option<String>,
    ) -> async_graphql::Result<RentalObject> {
        let identity = ctx
            .data_unchecked::<Option<AuthContext>>()
            .as_ref()
            .ok_or_else(|| async_graphql::Error::new("Unauthorized"))?;

        let state = ctx.data_unchecked::<AppState>();
        let rental = state
            .rentals
            .rent_car(
                identity.user_id,
                Some(CarId::Text(car_id.to_string())),
                start_date,
                end_date,
            )
            .await
            .map_err(|err| async_graphql::Error::new(err.to_string()))?;

        Ok(rental.into())
    }
}

/// Build the executable schema over the shared application state
pub fn build_schema(state: AppState) -> ApiSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

/// Handler for POST /graphql
///
/// The identity resolved by the bearer middleware (possibly absent) is
/// threaded into the GraphQL context, independent per request.
pub async fn graphql_handler(
    schema: web::Data<ApiSchema>,
    identity: MaybeAuth,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema
        .execute(request.into_inner().data(identity.0))
        .await
        .into()
}
