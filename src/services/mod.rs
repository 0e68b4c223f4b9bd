pub mod catalog_service;
pub mod currency_service;
pub mod item_store;
pub mod package_service;
pub mod pricing_service;
pub mod tax_service;
pub mod wizard_service;
