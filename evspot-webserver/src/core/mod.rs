pub use evspot_core::{db, gateways, repositories};

pub mod entities {
    pub use evspot_core::entities::*;
    #[cfg(test)]
    pub use evspot_entities::builders::*;
}

pub mod usecases {
    pub use evspot_core::usecases::*;
}

pub mod prelude {
    pub use evspot_application::error::*;

    pub use super::{db::*, entities::*, repositories::*};
}
