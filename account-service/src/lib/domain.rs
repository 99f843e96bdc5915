pub mod company;
pub mod contact;
pub mod customer;
pub mod principal;
pub mod product;
pub mod vehicle;
