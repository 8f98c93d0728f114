// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod collaborators_datasource;
        pub(crate) mod ledger_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod collaborator_model;
        pub(crate) mod hire_date_model;
        pub(crate) mod ledger_row_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod obligations_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod collaborator;
        pub(crate) mod ledger_entry;
        pub(crate) mod obligation;
        pub(crate) mod period;
    }
    pub(crate) mod logic {
        pub(crate) mod due_date;
        pub(crate) mod eligibility;
        pub(crate) mod urgency;
    }
    pub(crate) mod repositories {
        pub(crate) mod obligations_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod schedule_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod report_fmt;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::collaborator::*;
        pub use crate::domain::entities::ledger_entry::*;
        pub use crate::domain::entities::obligation::*;
        pub use crate::domain::entities::period::*;
    }

    pub mod datasources {
        pub use crate::data::datasources::collaborators_datasource::*;
        pub use crate::data::datasources::ledger_datasource::*;
        pub use crate::data::models::collaborator_model::*;
        pub use crate::data::models::ledger_row_model::*;
    }

    pub mod repositories {
        pub use crate::data::repositories::obligations_repository_impl::*;
        pub use crate::domain::repositories::obligations_repository::*;
    }

    pub mod usecases {
        pub use crate::domain::usecases::schedule_usecase::*;
    }

    pub mod report {
        pub use crate::presentation::report_fmt::*;
    }
}
