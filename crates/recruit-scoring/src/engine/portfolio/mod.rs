mod health;
mod import;

pub use health::{
    calculate_portfolio_health, PortfolioHealth, PortfolioStatus, SchoolEntry,
    MIN_RECOMMENDED_SCHOOLS,
};
pub use import::{SchoolImportError, SchoolListImporter};
