mod catalog_properties;
mod search_properties;
mod strategies;
