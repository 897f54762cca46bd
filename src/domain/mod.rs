pub mod criteria;
pub mod property;
pub mod validation;

pub use criteria::{FilterCriteria, FilterField, FilterProfile, FilterQuery};
pub use property::Property;
pub use validation::{validate, ValidationErrors};
