use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::core::repository::Repositories;

pub fn create_catalog_service(config: &Configuration, repos: &Repositories) -> Box<dyn CatalogService> {
    Box::new(CatalogServiceImpl::new(config, repos.books.clone(), repos.checkouts.clone()))
}
