mod catalog_port;

pub use catalog_port::CatalogPort;
