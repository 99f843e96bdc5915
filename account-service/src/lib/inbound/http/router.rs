use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use auth::TokenService;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::add_product::add_product;
use super::handlers::add_vehicle::add_vehicle;
use super::handlers::count_customers::count_customers;
use super::handlers::count_customers::count_registered_customers;
use super::handlers::create_company::create_company;
use super::handlers::create_customer::create_customer;
use super::handlers::current_principal::current_principal;
use super::handlers::delete_product::delete_product;
use super::handlers::delete_vehicle::delete_vehicle;
use super::handlers::get_company::get_company;
use super::handlers::get_company::list_companies;
use super::handlers::get_customer::get_customer;
use super::handlers::get_customer::list_customers;
use super::handlers::get_product::count_products;
use super::handlers::get_product::get_product;
use super::handlers::get_product::list_company_products;
use super::handlers::get_product::list_products;
use super::handlers::get_vehicle::count_vehicles;
use super::handlers::get_vehicle::get_vehicle;
use super::handlers::get_vehicle::get_vehicle_by_vin;
use super::handlers::get_vehicle::list_customer_vehicles;
use super::handlers::get_vehicle::list_vehicles;
use super::handlers::login::company_login;
use super::handlers::login::login;
use super::handlers::update_company::update_company;
use super::handlers::update_customer::update_customer;
use super::handlers::update_vehicle::update_vehicle;
use super::middleware::authenticate;
use super::middleware::require_principal;
use super::middleware::AuthenticationFilter;
use crate::domain::company::ports::CompanyRepository;
use crate::domain::company::ports::CompanyServicePort;
use crate::domain::company::service::CompanyService;
use crate::domain::customer::ports::CustomerRepository;
use crate::domain::customer::ports::CustomerServicePort;
use crate::domain::customer::service::CustomerService;
use crate::domain::principal::service::CompanyPrincipalLookup;
use crate::domain::principal::service::CustomerPrincipalLookup;
use crate::domain::product::ports::ProductRepository;
use crate::domain::product::ports::ProductServicePort;
use crate::domain::product::service::ProductService;
use crate::domain::vehicle::ports::VehicleRepository;
use crate::domain::vehicle::ports::VehicleServicePort;
use crate::domain::vehicle::service::VehicleService;

#[derive(Clone)]
pub struct AppState {
    pub customer_service: Arc<dyn CustomerServicePort>,
    pub company_service: Arc<dyn CompanyServicePort>,
    pub vehicle_service: Arc<dyn VehicleServicePort>,
    pub product_service: Arc<dyn ProductServicePort>,
    pub authenticator: Arc<Authenticator>,
    pub authentication_filter: Arc<AuthenticationFilter>,
}

impl AppState {
    /// Wire services, principal lookups and the authentication filter over
    /// the given stores.
    pub fn new<CR, MR, VR, PR>(
        customer_repository: Arc<CR>,
        company_repository: Arc<MR>,
        vehicle_repository: Arc<VR>,
        product_repository: Arc<PR>,
        token_service: TokenService,
    ) -> Self
    where
        CR: CustomerRepository,
        MR: CompanyRepository,
        VR: VehicleRepository,
        PR: ProductRepository,
    {
        let authentication_filter = AuthenticationFilter::new(
            token_service.clone(),
            Arc::new(CustomerPrincipalLookup::new(Arc::clone(&customer_repository))),
            Arc::new(CompanyPrincipalLookup::new(Arc::clone(&company_repository))),
        );

        Self {
            vehicle_service: Arc::new(VehicleService::new(
                vehicle_repository,
                Arc::clone(&customer_repository),
            )),
            product_service: Arc::new(ProductService::new(
                product_repository,
                Arc::clone(&company_repository),
            )),
            customer_service: Arc::new(CustomerService::new(customer_repository)),
            company_service: Arc::new(CompanyService::new(company_repository)),
            authenticator: Arc::new(Authenticator::new(token_service)),
            authentication_filter: Arc::new(authentication_filter),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/companies/login", post(company_login))
        .route("/api/customers", post(create_customer))
        .route("/api/companies", post(create_company))
        .route("/api/customers/count", get(count_customers))
        .route("/api/customers/count/:window", get(count_registered_customers))
        .route("/api/vehicles/count", get(count_vehicles))
        .route("/api/products/count", get(count_products));

    let protected_routes = Router::new()
        .route("/api/auth/me", get(current_principal))
        .route("/api/customers", get(list_customers))
        .route(
            "/api/customers/:customer_id",
            get(get_customer).put(update_customer),
        )
        .route("/api/companies", get(list_companies))
        .route(
            "/api/companies/:company_id",
            get(get_company).put(update_company),
        )
        .route(
            "/api/customers/:customer_id/vehicles",
            get(list_customer_vehicles),
        )
        .route("/api/vehicles", get(list_vehicles).post(add_vehicle))
        .route(
            "/api/vehicles/:vehicle_id",
            get(get_vehicle).put(update_vehicle).delete(delete_vehicle),
        )
        .route("/api/vehicles/vin/:vin", get(get_vehicle_by_vin))
        .route(
            "/api/companies/:company_id/products",
            get(list_company_products),
        )
        .route("/api/products", get(list_products).post(add_product))
        .route(
            "/api/products/:product_id",
            get(get_product).delete(delete_product),
        )
        .route_layer(middleware::from_fn(require_principal));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    // Outermost first: tracing, CORS, then the authentication filter on every request.
    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(CorsLayer::permissive())
                .layer(middleware::from_fn_with_state(state.clone(), authenticate)),
        )
        .with_state(state)
}
