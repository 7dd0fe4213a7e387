
pub(crate) use fixtures::*;

mod reducer_tests;
mod subscription_tests;
