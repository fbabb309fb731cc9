pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_ACCESS_TOKEN, TEST_API_VERSION, TEST_NAMESPACE, TEST_SECRET},
        builder::operation,
        fixtures::factory,
        TestBuilder, TestContext, TestError,
    };
}
