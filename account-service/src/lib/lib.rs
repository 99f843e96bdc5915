pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::company;
pub use domain::customer;
pub use domain::principal;
pub use domain::product;
pub use domain::vehicle;
pub use outbound::repositories;
