//! Entity definitions for every Northwind table, one module per table.

pub mod category;
pub mod customer;
pub mod customer_customer_demo;
pub mod customer_demographic;
pub mod employee;
pub mod employee_territory;
pub mod links;
pub mod order;
pub mod order_detail;
pub mod product;
pub mod region;
pub mod shipper;
pub mod supplier;
pub mod territory;
pub mod us_state;

pub use category::Entity as Category;
pub use customer::Entity as Customer;
pub use customer_customer_demo::Entity as CustomerCustomerDemo;
pub use customer_demographic::Entity as CustomerDemographic;
pub use employee::Entity as Employee;
pub use employee_territory::Entity as EmployeeTerritory;
pub use order::Entity as Order;
pub use order_detail::Entity as OrderDetail;
pub use product::Entity as Product;
pub use region::Entity as Region;
pub use shipper::Entity as Shipper;
pub use supplier::Entity as Supplier;
pub use territory::Entity as Territory;
pub use us_state::Entity as UsState;
