use std::sync::Arc;

use rocket::{
    self,
    request::{FromRequest, Outcome, Request},
    State,
};

use crate::{
    core::{
        entities::Id,
        gateways::{content::CarContentGateway, geocode::GeoCodingGateway, routing::RoutingGateway},
        usecases::Error as ParameterError,
    },
    web::jwt,
};

fn get_bearer_token(auth_header_val: &str) -> Option<&str> {
    let x: Vec<_> = auth_header_val.split(' ').collect();
    if x.len() == 2 && x[0] == "Bearer" {
        Some(x[1])
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenRejection {
    Missing,
    Invalid,
    Expired,
}

impl From<&ParameterError> for TokenRejection {
    fn from(err: &ParameterError) -> Self {
        match err {
            ParameterError::TokenExpired => Self::Expired,
            _ => Self::Invalid,
        }
    }
}

impl From<TokenRejection> for ParameterError {
    fn from(from: TokenRejection) -> Self {
        match from {
            TokenRejection::Missing => Self::Unauthorized,
            TokenRejection::Invalid => Self::TokenInvalid,
            TokenRejection::Expired => Self::TokenExpired,
        }
    }
}

/// The caller as identified by the bearer access token.
///
/// The guard never fails: routes decide whether they need
/// an authenticated user by calling [`Auth::user_id`].
#[derive(Debug)]
pub struct Auth {
    user_id: Result<Id, TokenRejection>,
}

impl Auth {
    pub fn user_id(&self) -> Result<&Id, ParameterError> {
        self.user_id.as_ref().map_err(|rejection| (*rejection).into())
    }

    fn bearer_token_from_header<'r>(request: &'r Request) -> Option<&'r str> {
        request
            .headers()
            .get("Authorization")
            .find_map(get_bearer_token)
    }

    async fn user_id_from_jwt_in_header(request: &Request<'_>) -> Result<Id, TokenRejection> {
        let token = Self::bearer_token_from_header(request).ok_or(TokenRejection::Missing)?;
        let jwt_state = request
            .guard::<&State<jwt::JwtState>>()
            .await
            .succeeded()
            .ok_or(TokenRejection::Invalid)?;
        jwt_state
            .validate_access_token(token)
            .map_err(|err| TokenRejection::from(&err))
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let user_id = Self::user_id_from_jwt_in_header(request).await;
        Outcome::Success(Self { user_id })
    }
}

pub struct Version(pub &'static str);

#[derive(Clone, Default)]
pub struct GeoCoding(pub Option<Arc<dyn GeoCodingGateway + Send + Sync>>);

#[derive(Clone, Default)]
pub struct Routing(pub Option<Arc<dyn RoutingGateway + Send + Sync>>);

#[derive(Clone, Default)]
pub struct ContentGeneration(pub Option<Arc<dyn CarContentGateway + Send + Sync>>);

impl Routing {
    pub fn gateway(&self) -> Result<Arc<dyn RoutingGateway + Send + Sync>, ParameterError> {
        self.0.clone().ok_or(ParameterError::RouteUnavailable)
    }
}

impl ContentGeneration {
    pub fn gateway(&self) -> Result<Arc<dyn CarContentGateway + Send + Sync>, ParameterError> {
        self.0.clone().ok_or_else(|| {
            ParameterError::ContentGeneration("no content generation service configured".into())
        })
    }
}
