pub mod company;
pub mod customer;
pub mod product;
pub mod vehicle;

pub use company::PostgresCompanyRepository;
pub use customer::PostgresCustomerRepository;
pub use product::PostgresProductRepository;
pub use vehicle::PostgresVehicleRepository;
