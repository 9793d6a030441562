//! Input document model and acquisition.

mod load;
mod types;

pub use load::load_document;
pub use types::{
    ApiSpec, Components, FlexibleRequired, Info, MediaType, Operation, Parameter,
    ParameterLocation, PathItem, RequestBody, Response, Schema, Server,
};
