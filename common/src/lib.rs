pub mod cms;
pub mod model;
pub mod validation;
