//! In-memory API collaborators standing in for the remote REST backend.
//!
//! Each entity endpoint is its own struct implementing
//! [`EntityApi`](table_framework::EntityApi), sharing state where the
//! backend's rules demand it (orders are priced from products, products
//! reference categories).

pub mod categories;
pub mod orders;
pub mod products;

pub use categories::CategoriesApi;
pub use orders::OrdersApi;
pub use products::ProductsApi;
